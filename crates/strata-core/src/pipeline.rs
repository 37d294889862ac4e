//! Bottleneck resolution across the three-stage pipeline.
//!
//! The mine models a physical extract -> lift -> store chain: realized
//! production is the minimum of the three stage throughputs, so the
//! weakest stage caps output no matter how over-built the others are.

use crate::stage::Stage;

/// Combined result of the minimum-of-stages rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineResult {
    /// The realized throughput: `min(shafts, elevator, warehouse)`.
    pub realized: f64,
    /// Which stage constrained the result. `None` when nothing flows.
    pub bottleneck: Option<Stage>,
}

/// Apply the minimum-of-stages rule.
///
/// On an exact tie the label precedence is shafts, then elevator, then
/// warehouse (first match wins). The ordering only affects the reported
/// label, never the realized value.
pub fn resolve(shafts: f64, elevator: f64, warehouse: f64) -> PipelineResult {
    let realized = shafts.min(elevator).min(warehouse);

    let bottleneck = if realized > 0.0 {
        if realized == shafts {
            Some(Stage::Shafts)
        } else if realized == elevator {
            Some(Stage::Elevator)
        } else {
            Some(Stage::Warehouse)
        }
    } else {
        None
    };

    PipelineResult {
        realized,
        bottleneck,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn realized_is_minimum() {
        let r = resolve(10.0, 20.0, 30.0);
        assert_eq!(r.realized, 10.0);
        assert_eq!(r.bottleneck, Some(Stage::Shafts));
    }

    #[test]
    fn each_stage_can_be_the_bottleneck() {
        assert_eq!(resolve(50.0, 20.0, 30.0).bottleneck, Some(Stage::Elevator));
        assert_eq!(resolve(50.0, 40.0, 30.0).bottleneck, Some(Stage::Warehouse));
    }

    #[test]
    fn zero_throughput_has_no_bottleneck() {
        assert_eq!(resolve(0.0, 20.0, 30.0).bottleneck, None);
        assert_eq!(resolve(0.0, 0.0, 0.0).bottleneck, None);
    }

    #[test]
    fn tie_precedence_is_shafts_elevator_warehouse() {
        assert_eq!(resolve(10.0, 10.0, 10.0).bottleneck, Some(Stage::Shafts));
        assert_eq!(resolve(20.0, 10.0, 10.0).bottleneck, Some(Stage::Elevator));
    }

    proptest! {
        /// The realized value is always the true minimum and the label
        /// always points at a stage carrying that value.
        #[test]
        fn min_rule_holds(
            s in 0.0f64..1e12,
            e in 0.0f64..1e12,
            w in 0.0f64..1e12,
        ) {
            let r = resolve(s, e, w);
            prop_assert_eq!(r.realized, s.min(e).min(w));
            match r.bottleneck {
                Some(Stage::Shafts) => prop_assert_eq!(r.realized, s),
                Some(Stage::Elevator) => prop_assert_eq!(r.realized, e),
                Some(Stage::Warehouse) => prop_assert_eq!(r.realized, w),
                None => prop_assert_eq!(r.realized, 0.0),
            }
        }
    }
}
