use std::net::Ipv4Addr;

use crate::errors::RecordError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Keep the address's offset from `low`, counted from this base.
    Offset(Ipv4Addr),

    /// Replace the address with every entry, in order.
    FanOut(Vec<Ipv4Addr>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRule {
    pub low: Ipv4Addr,
    pub high: Ipv4Addr,
    pub rewrite: Rewrite,
}

impl TransformRule {
    pub fn contains(&self, address: Ipv4Addr) -> bool {
        (u32::from(self.low)..=u32::from(self.high)).contains(&u32::from(address))
    }

    /// Rewritten addresses for `address`; an address outside the range is returned as-is.
    pub fn apply(&self, address: Ipv4Addr) -> Result<Vec<Ipv4Addr>, RecordError> {
        if !self.contains(address) {
            return Ok(vec![address]);
        }

        match &self.rewrite {
            Rewrite::FanOut(targets) => Ok(targets.clone()),
            Rewrite::Offset(new_base) => {
                let delta = u32::from(address) - u32::from(self.low);
                u32::from(*new_base)
                    .checked_add(delta)
                    .map(|rewritten| vec![Ipv4Addr::from(rewritten)])
                    .ok_or(RecordError::AddressOverflow {
                        address,
                        low: self.low,
                        new_base: *new_base,
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_rule(low: &str, high: &str, base: &str) -> TransformRule {
        TransformRule {
            low: low.parse().unwrap(),
            high: high.parse().unwrap(),
            rewrite: Rewrite::Offset(base.parse().unwrap()),
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rule = offset_rule("10.0.0.10", "10.0.0.20", "192.0.2.0");

        assert!(!rule.contains("10.0.0.9".parse().unwrap()));
        assert!(rule.contains("10.0.0.10".parse().unwrap()));
        assert!(rule.contains("10.0.0.20".parse().unwrap()));
        assert!(!rule.contains("10.0.0.21".parse().unwrap()));
    }

    #[test]
    fn test_offset_carries_across_octets() {
        let rule = offset_rule("10.0.0.0", "10.0.255.255", "192.0.2.200");

        let out = rule.apply("10.0.1.100".parse().unwrap()).unwrap();

        assert_eq!(out, vec!["192.0.4.44".parse::<Ipv4Addr>().unwrap()]);
    }

    #[test]
    fn test_offset_overflow_is_an_error() {
        let rule = offset_rule("10.0.0.0", "10.0.0.255", "255.255.255.250");

        let err = rule.apply("10.0.0.10".parse().unwrap()).unwrap_err();

        assert!(matches!(err, RecordError::AddressOverflow { .. }));
    }

    #[test]
    fn test_address_outside_range_is_untouched() {
        let rule = offset_rule("10.0.0.10", "10.0.0.20", "255.255.255.250");

        let below = rule.apply("10.0.0.1".parse().unwrap()).unwrap();
        let above = rule.apply("10.0.0.30".parse().unwrap()).unwrap();

        assert_eq!(below, vec!["10.0.0.1".parse::<Ipv4Addr>().unwrap()]);
        assert_eq!(above, vec!["10.0.0.30".parse::<Ipv4Addr>().unwrap()]);
    }

    #[test]
    fn test_offset_reaching_broadcast_is_allowed() {
        let rule = offset_rule("10.0.0.0", "10.0.0.255", "255.255.255.250");

        let out = rule.apply("10.0.0.5".parse().unwrap()).unwrap();

        assert_eq!(out, vec![Ipv4Addr::BROADCAST]);
    }
}
