//! Invariant matrix across every catalog model and stack size.

use onboard_test::{PlanVerifier, RequestFixture};
use onboardmgr::{DeviceModel, OnboardMgr};

#[test]
fn test_every_model_and_stack_size_conserves_ports() {
    let mgr = OnboardMgr::new();

    for model in DeviceModel::ALL {
        for members in 1..=5u32 {
            let req = RequestFixture::new("acc-sw-01")
                .model(model)
                .stack(members)
                .ap_count(Some(3))
                .guest_count(Some(2))
                .build();
            let plan = mgr
                .plan(&req)
                .unwrap_or_else(|e| panic!("{} x{}: {}", model, members, e));

            let verifier = PlanVerifier::new(&plan);
            verifier.assert_ports_disjoint().unwrap();
            verifier.assert_summary_consistent().unwrap();
            verifier
                .assert_port_conservation(model.user_port_count() as usize * members as usize)
                .unwrap();
            if members > 1 {
                verifier.assert_chassis_members(members as usize).unwrap();
            } else {
                verifier.assert_single_chassis().unwrap();
            }
        }
    }
}

#[test]
fn test_demand_never_overdraws_small_models() {
    // 12 user ports, 3 members: quotas of 4+4 fit exactly; nothing is
    // double-booked and BLAN simply runs dry.
    let req = RequestFixture::new("acc-sw-01")
        .model(DeviceModel::C9200cx12p2x2g)
        .stack(3)
        .ap_count(Some(10))
        .guest_count(Some(10))
        .build();
    let plan = OnboardMgr::new().plan(&req).unwrap();

    let verifier = PlanVerifier::new(&plan);
    verifier.assert_ports_disjoint().unwrap();
    verifier.assert_port_conservation(36).unwrap();

    // 10 over 3 members rounds up to 4 per member.
    assert_eq!(plan.summary.ap_ports, 12);
    assert_eq!(plan.summary.guest_ports, 12);
    assert_eq!(plan.summary.blan_ports, 12);
}
