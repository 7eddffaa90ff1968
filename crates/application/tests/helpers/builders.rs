use ferrous_zone_domain::{
    Record, RecordType, Zone, TRANSFORM_METADATA_KEY, TRANSFORM_TABLE_METADATA_KEY,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(record_type: RecordType) -> Self {
        Self {
            record: Record::new("www", record_type, "192.0.2.1"),
        }
    }

    pub fn a(name: &str, target: &str) -> Self {
        Self::new(RecordType::A).name(name).target(target)
    }

    pub fn cname(name: &str, target: &str) -> Self {
        Self::new(RecordType::CNAME).name(name).target(target)
    }

    pub fn import(name: &str, source_zone: &str, table: &str) -> Self {
        Self::new(RecordType::ImportTransform)
            .name(name)
            .target(source_zone)
            .metadata(TRANSFORM_TABLE_METADATA_KEY, table)
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        self.record.target = target.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.record.ttl = ttl;
        self
    }

    pub fn transform(self, rules: &str) -> Self {
        self.metadata(TRANSFORM_METADATA_KEY, rules)
    }

    pub fn metadata(mut self, key: &str, value: &str) -> Self {
        self.record.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

pub struct ZoneBuilder {
    zone: Zone,
}

impl ZoneBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            zone: Zone::new(name, vec![]),
        }
    }

    pub fn record(mut self, record: RecordBuilder) -> Self {
        self.zone.records.push(record.build());
        self
    }

    pub fn migrate_to(mut self, suffix: &str) -> Self {
        self.zone.migrate_to = Some(suffix.to_string());
        self
    }

    pub fn build(self) -> Zone {
        self.zone
    }
}
