use std::net::Ipv4Addr;
use std::str::FromStr;

use super::rule::{Rewrite, TransformRule};
use crate::errors::{RecordError, RuleSyntaxError};

const RULE_SEPARATOR: char = ';';
const FIELD_SEPARATOR: char = '~';
const TARGET_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRuleSet {
    rules: Vec<TransformRule>,
}

impl TransformRuleSet {
    pub fn new(rules: Vec<TransformRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[TransformRule] {
        &self.rules
    }

    /// First rule whose range contains `address`.
    pub fn find(&self, address: Ipv4Addr) -> Option<&TransformRule> {
        self.rules.iter().find(|rule| rule.contains(address))
    }

    /// Rewritten addresses for `address`; an address no rule matches passes through as-is.
    pub fn apply(&self, address: Ipv4Addr) -> Result<Vec<Ipv4Addr>, RecordError> {
        match self.find(address) {
            Some(rule) => rule.apply(address),
            None => Ok(vec![address]),
        }
    }
}

impl FromStr for TransformRuleSet {
    type Err = RuleSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rules = s
            .split(RULE_SEPARATOR)
            .enumerate()
            .map(|(index, rule)| parse_rule(index, rule))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }
}

fn parse_rule(index: usize, rule: &str) -> Result<TransformRule, RuleSyntaxError> {
    let fields: Vec<&str> = rule.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [low, high, new_base, targets] = fields[..] else {
        return Err(RuleSyntaxError::FieldCount {
            rule: index,
            found: fields.len(),
        });
    };

    let low = parse_bound(index, "low", low)?;
    let high = parse_bound(index, "high", high)?;
    if u32::from(low) > u32::from(high) {
        return Err(RuleSyntaxError::InvertedRange {
            rule: index,
            low,
            high,
        });
    }

    let rewrite = match (new_base.is_empty(), targets.is_empty()) {
        (false, false) => return Err(RuleSyntaxError::BothRewrites { rule: index }),
        (true, true) => return Err(RuleSyntaxError::NoRewrite { rule: index }),
        (false, true) => Rewrite::Offset(parse_address(index, "new base", new_base)?),
        (true, false) => Rewrite::FanOut(
            targets
                .split(TARGET_SEPARATOR)
                .map(|target| parse_address(index, "explicit target", target.trim()))
                .collect::<Result<Vec<_>, _>>()?,
        ),
    };

    Ok(TransformRule { low, high, rewrite })
}

fn parse_bound(rule: usize, field: &'static str, value: &str) -> Result<Ipv4Addr, RuleSyntaxError> {
    if value.is_empty() {
        return Err(RuleSyntaxError::MissingBound { rule, field });
    }
    parse_address(rule, field, value)
}

fn parse_address(
    rule: usize,
    field: &'static str,
    value: &str,
) -> Result<Ipv4Addr, RuleSyntaxError> {
    value
        .parse::<Ipv4Addr>()
        .map_err(|_| RuleSyntaxError::InvalidAddress {
            rule,
            field,
            value: value.to_string(),
        })
}
