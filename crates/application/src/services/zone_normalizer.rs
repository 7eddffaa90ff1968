use ferrous_zone_domain::{
    assert_no_trailing_dot, assert_no_underscore, assert_valid_ipv4, assert_valid_target,
    transform_cname, ErrorMode, NormalizeError, NormalizerConfig, Record, RecordError,
    RecordType, Rewrite, TransformRuleSet, ValidationError, Zone,
};
use tracing::{debug, info, instrument, warn};

/// Validates, transforms and canonicalizes the records of one zone.
pub struct ZoneNormalizer {
    config: NormalizerConfig,
}

impl ZoneNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Replaces the zone's records with their normalized form.
    ///
    /// The zone is only touched when every record passes; on failure it is returned to the
    /// caller exactly as it came in.
    #[instrument(skip(self, zone), fields(zone = %zone.name))]
    pub fn normalize(&self, zone: &mut Zone) -> Result<(), NormalizeError> {
        let mut records = Vec::with_capacity(zone.records.len());
        let mut errors = Vec::new();

        for (position, record) in zone.records.iter().enumerate() {
            match self.normalize_record(zone, record) {
                Ok(normalized) => records.extend(normalized),
                Err(source) => {
                    let error = ValidationError {
                        zone: zone.name.clone(),
                        position,
                        name: record.name.clone(),
                        record_type: record.record_type,
                        source,
                    };
                    warn!(error = %error, "Record failed validation");
                    errors.push(error);

                    if self.config.error_mode == ErrorMode::FailFast {
                        break;
                    }
                }
            }
        }

        if let Some(error) = NormalizeError::new(errors) {
            return Err(error);
        }

        info!(
            before = zone.records.len(),
            after = records.len(),
            "Zone normalized"
        );
        zone.records = records;
        Ok(())
    }

    /// Normalized replacement for a single record: usually one record, several after a
    /// fan-out transform.
    pub fn normalize_record(&self, zone: &Zone, record: &Record) -> Result<Vec<Record>, RecordError> {
        Self::validate(record)?;

        let mut record = record.clone();
        if record.ttl == 0 && !record.record_type.is_pseudo() {
            record.ttl = self.config.default_ttl;
        }

        let expanded = Self::apply_transform(record)?;
        Ok(expanded
            .into_iter()
            .map(|record| Self::canonicalize(zone, record))
            .collect())
    }

    pub fn validate(record: &Record) -> Result<(), RecordError> {
        assert_no_trailing_dot(&record.name)?;
        if !record.record_type.allows_underscore_label() {
            assert_no_underscore(&record.name)?;
        }

        match record.record_type {
            RecordType::A => {
                assert_valid_ipv4(&record.target)?;
            }
            rtype if rtype.has_hostname_target() => assert_valid_target(&record.target)?,
            _ => {}
        }

        if record.record_type.forbidden_at_apex() && record.is_apex() {
            return Err(RecordError::ApexNotAllowed(record.record_type));
        }

        Ok(())
    }

    fn apply_transform(record: Record) -> Result<Vec<Record>, RecordError> {
        if record.record_type != RecordType::A {
            return Ok(vec![record]);
        }
        let Some(rules) = record.transform() else {
            return Ok(vec![record]);
        };

        let rules: TransformRuleSet = rules.parse()?;
        let address = assert_valid_ipv4(&record.target)?;

        let Some(rule) = rules.find(address) else {
            debug!(name = %record.name, %address, "No transform rule matches, keeping target");
            return Ok(vec![record]);
        };

        let rewritten = rule.apply(address)?;
        match rule.rewrite {
            Rewrite::Offset(_) => {
                debug!(name = %record.name, from = %address, to = ?rewritten, "Offset rewrite")
            }
            Rewrite::FanOut(_) => {
                debug!(name = %record.name, from = %address, count = rewritten.len(), "Fan-out rewrite")
            }
        }

        Ok(rewritten
            .into_iter()
            .map(|target| record.with_target(target.to_string()))
            .collect())
    }

    fn canonicalize(zone: &Zone, mut record: Record) -> Record {
        if record.record_type == RecordType::CNAME {
            if let Some(new_suffix) = &zone.migrate_to {
                record.target = transform_cname(
                    &record.target,
                    zone.apex(),
                    new_suffix.trim_end_matches('.'),
                );
            }
        }

        if record.record_type.has_hostname_target() {
            record.target = zone.absolute_target(&record.target);
        }

        record.name_fqdn = zone.fqdn(&record.name);
        record
    }
}
