use ferrous_zone_domain::{
    ErrorMode, NormalizeError, NormalizerConfig, Record, RecordError, ValidationError, Zone,
};
use tracing::{info, instrument, warn};

use crate::services::{ImportTransformer, ZoneNormalizer};

/// Full normalization pass over every zone of a configuration.
///
/// Each zone is normalized on its own first, then import pseudo-records are resolved against
/// the normalized zones and removed. Zones are written back only if the whole pass succeeds.
pub struct NormalizeZonesUseCase {
    normalizer: ZoneNormalizer,
    importer: ImportTransformer,
}

impl NormalizeZonesUseCase {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            importer: ImportTransformer::new(&config),
            normalizer: ZoneNormalizer::new(config),
        }
    }

    #[instrument(skip_all, fields(zones = zones.len()))]
    pub fn execute(&self, zones: &mut [Zone]) -> Result<(), NormalizeError> {
        let fail_fast = self.fail_fast();
        let mut errors = Vec::new();

        let mut normalized = Vec::with_capacity(zones.len());
        for zone in zones.iter() {
            let mut candidate = zone.clone();
            match self.normalizer.normalize(&mut candidate) {
                Ok(()) => normalized.push(candidate),
                Err(error) if fail_fast => return Err(error),
                Err(error) => errors.extend(error.into_errors()),
            }
        }

        // Imports read their sources in normalized form, so a failed zone stops here.
        if let Some(error) = NormalizeError::new(std::mem::take(&mut errors)) {
            return Err(error);
        }

        let mut resolved = Vec::with_capacity(normalized.len());
        for (original, zone) in zones.iter().zip(&normalized) {
            resolved.push(self.resolve_imports(original, zone, &normalized, &mut errors));
            if fail_fast && !errors.is_empty() {
                break;
            }
        }

        if let Some(error) = NormalizeError::new(errors) {
            return Err(error);
        }

        let mut total = 0;
        for ((zone, mut candidate), records) in zones.iter_mut().zip(normalized).zip(resolved) {
            total += records.len();
            candidate.records = records;
            *zone = candidate;
        }

        info!(records = total, "All zones normalized");
        Ok(())
    }

    /// Records of `zone` with its import pseudo-records replaced by what they import.
    fn resolve_imports(
        &self,
        original: &Zone,
        zone: &Zone,
        zones: &[Zone],
        errors: &mut Vec<ValidationError>,
    ) -> Vec<Record> {
        let mut records: Vec<Record> = zone
            .records
            .iter()
            .filter(|record| !record.record_type.is_pseudo())
            .cloned()
            .collect();

        let pseudo_records = original
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.record_type.is_pseudo());

        for (position, pseudo) in pseudo_records {
            let imported = find_zone(zones, &pseudo.target)
                .ok_or_else(|| RecordError::UnknownImportSource(pseudo.target.clone()))
                .and_then(|source| self.importer.import(source, zone, pseudo));

            match imported {
                Ok(imported) => records.extend(imported),
                Err(source) => {
                    let error = ValidationError {
                        zone: zone.name.clone(),
                        position,
                        name: pseudo.name.clone(),
                        record_type: pseudo.record_type,
                        source,
                    };
                    warn!(error = %error, "Import transform failed");
                    errors.push(error);

                    if self.fail_fast() {
                        break;
                    }
                }
            }
        }

        records
    }

    fn fail_fast(&self) -> bool {
        self.normalizer.config().error_mode == ErrorMode::FailFast
    }
}

fn find_zone<'a>(zones: &'a [Zone], name: &str) -> Option<&'a Zone> {
    let name = name.trim_end_matches('.');
    zones
        .iter()
        .find(|zone| zone.apex().eq_ignore_ascii_case(name))
}
