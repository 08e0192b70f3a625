//! onboardmgr - access-switch onboarding planner CLI
//!
//! Collects the onboarding parameters an operator would enter into the
//! provisioning form, builds the plan, and prints the action log (or the
//! plan as JSON with `--json`).

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use onboard_common::{OnboardError, OnboardResult};
use onboardmgr::{DeviceModel, OnboardMgr, OnboardRequest};

/// Access-switch onboarding planner
#[derive(Parser, Debug)]
#[command(name = "onboardmgr")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Device hostname (base name for stacks)
    #[arg(short = 'n', long)]
    device_name: String,

    /// Access switch model slug, e.g. cisco-c9300l-24p-4x
    #[arg(short = 'm', long)]
    model: String,

    /// Site name
    #[arg(short = 's', long)]
    site: String,

    /// Device mgmt IP, e.g. 192.168.20.10/23
    #[arg(long)]
    mgmt_address: String,

    /// Default gateway, e.g. 10.10.10.1
    #[arg(long)]
    gateway: String,

    /// Mgmt VLAN ID
    #[arg(long, default_value = "60")]
    mgmt_vlan: u16,

    /// Business LAN VLAN ID, e.g. 1101
    #[arg(long)]
    blan_vlan: u16,

    /// Guest VLAN ID, e.g. 3101
    #[arg(long)]
    guest_vlan: u16,

    /// Number of access points to be installed on the switch
    #[arg(long)]
    ap_count: Option<u32>,

    /// Number of wired guest users that need access on the switch
    #[arg(long)]
    guest_count: Option<u32>,

    /// Provision a switch stack
    #[arg(long)]
    stack: bool,

    /// Number of stack members (ignored without --stack)
    #[arg(long, default_value = "1")]
    members: u32,

    /// Uplink port 1 interface
    #[arg(long)]
    uplink1: String,

    /// Uplink port 1 description
    #[arg(long, default_value = "remotehost=os-z07-41ra0043-01-sw-lef-a; port=xe-0/0/18")]
    uplink1_desc: String,

    /// Uplink port 2 interface
    #[arg(long)]
    uplink2: String,

    /// Uplink port 2 description
    #[arg(long, default_value = "remotehost=os-z07-41ra0043-01-sw-lef-b; port=xe-0/0/18")]
    uplink2_desc: String,

    /// LAG interface name (Po1/Po2/Po3)
    #[arg(long, default_value = "Po1")]
    lag: String,

    /// LAG interface description
    #[arg(long, default_value = "remotehost=os-z07-41ra0043-01-sw-lef-a/b; port=ae18")]
    lag_desc: String,

    /// Print the plan as JSON instead of the action log
    #[arg(long)]
    json: bool,
}

/// Initializes tracing/logging subsystem
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Onboarding failed: {}", e);
            if e.is_operator_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(args: &Args) -> OnboardResult<()> {
    let request = build_request(args)?;
    let plan = OnboardMgr::new().plan(&request)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&plan)
            .map_err(|e| OnboardError::invalid_config("plan", e.to_string()))?;
        println!("{}", rendered);
    } else {
        for action in &plan.actions {
            info!("{}", action);
        }
        info!(
            "Plan complete: {} actions, BLAN = {}, AP = {}, GUEST = {}",
            plan.actions.len(),
            plan.summary.blan_ports,
            plan.summary.ap_ports,
            plan.summary.guest_ports
        );
    }
    Ok(())
}

fn build_request(args: &Args) -> OnboardResult<OnboardRequest> {
    let model: DeviceModel = args.model.parse()?;
    let gateway_address = args.gateway.parse().map_err(|_| {
        OnboardError::invalid_config(
            "gateway",
            format!("'{}' is not an IPv4 address", args.gateway),
        )
    })?;

    Ok(OnboardRequest {
        device_name: args.device_name.clone(),
        model,
        site: args.site.clone(),
        mgmt_address: args.mgmt_address.parse()?,
        gateway_address,
        mgmt_vlan: args.mgmt_vlan,
        blan_vlan: args.blan_vlan,
        guest_vlan: args.guest_vlan,
        ap_count: args.ap_count,
        guest_count: args.guest_count,
        is_stack_switch: args.stack,
        stack_member_count: args.members,
        uplink_1: args.uplink1.clone(),
        uplink_desc_a: args.uplink1_desc.clone(),
        uplink_2: args.uplink2.clone(),
        uplink_desc_b: args.uplink2_desc.clone(),
        lag_name: args.lag.clone(),
        lag_desc: args.lag_desc.clone(),
    })
}
