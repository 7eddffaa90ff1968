use ferrous_zone_domain::{
    assert_valid_ipv4, transform_cname, NormalizerConfig, Record, RecordError, RecordType,
    TransformRuleSet, Zone, TRANSFORM_METADATA_KEY, TRANSFORM_TABLE_METADATA_KEY,
};
use tracing::debug;

/// Copies the A and CNAME records of a source zone into a destination zone, as requested
/// by an `IMPORT_TRANSFORM` pseudo-record.
pub struct ImportTransformer {
    ttl_override: bool,
}

impl ImportTransformer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            ttl_override: config.import_ttl_override,
        }
    }

    /// Records `pseudo` pulls out of `source`, renamed under `destination`.
    pub fn import(
        &self,
        source: &Zone,
        destination: &Zone,
        pseudo: &Record,
    ) -> Result<Vec<Record>, RecordError> {
        let table = pseudo
            .metadata
            .get(TRANSFORM_TABLE_METADATA_KEY)
            .ok_or(RecordError::MissingTransformTable)?;
        let rules: TransformRuleSet = table.parse()?;

        let mut imported = Vec::new();
        for record in &source.records {
            if !matches!(record.record_type, RecordType::A | RecordType::CNAME) {
                continue;
            }

            let mut copy = record.clone();
            copy.metadata.remove(TRANSFORM_METADATA_KEY);
            copy.name = source.fqdn(&record.name);
            copy.name_fqdn = destination.fqdn(&copy.name);
            if self.ttl_override && pseudo.ttl != 0 {
                copy.ttl = pseudo.ttl;
            }

            if record.record_type == RecordType::A {
                let address = assert_valid_ipv4(&record.target)?;
                imported.extend(
                    rules
                        .apply(address)?
                        .into_iter()
                        .map(|target| copy.with_target(target.to_string())),
                );
            } else {
                copy.target = transform_cname(&record.target, source.apex(), destination.apex());
                imported.push(copy);
            }
        }

        debug!(
            source = %source.apex(),
            destination = %destination.apex(),
            count = imported.len(),
            "Imported records"
        );
        Ok(imported)
    }
}
