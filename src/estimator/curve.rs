use crate::quantity::{Quantity, time::Hours, voltage::Volts};

/// Assumed voltage of a depleted bank, the start of the CC segment.
pub const DEPLETED_VOLTAGE: Volts = Quantity(22.5);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub time: Hours,
    pub voltage: Volts,
}

/// The four (time, voltage) samples of the two-segment charge curve.
///
/// The CC segment ramps from the depleted voltage up to the CC voltage, the
/// CV segment holds from there to the CV voltage. Both segments share the
/// knee point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargeCurve {
    pub cc: [CurvePoint; 2],
    pub cv: [CurvePoint; 2],
}

impl ChargeCurve {
    pub fn new(cc_time: Hours, cv_time: Hours, cc_voltage: Volts, cv_voltage: Volts) -> Self {
        let knee = CurvePoint { time: cc_time, voltage: cc_voltage };
        Self {
            cc: [CurvePoint { time: Hours::ZERO, voltage: DEPLETED_VOLTAGE }, knee],
            cv: [knee, CurvePoint { time: cc_time + cv_time, voltage: cv_voltage }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_share_the_knee() {
        let curve = ChargeCurve::new(
            Hours::from(3.0),
            Hours::from(10.0),
            Volts::from(26.7),
            Volts::from(26.75),
        );

        assert_eq!(curve.cc[0], CurvePoint { time: Hours::ZERO, voltage: DEPLETED_VOLTAGE });
        assert_eq!(curve.cc[1], curve.cv[0]);
        assert_eq!(curve.cv[1].time, Hours::from(13.0));
        assert_eq!(curve.cv[1].voltage, Volts::from(26.75));
    }
}
