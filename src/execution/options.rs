use derive_builder::Builder;

use crate::catalog::{StorageFormat, DEFAULT_INPUT_FORMAT, DEFAULT_OUTPUT_FORMAT, DEFAULT_SERDE};

/// Storage format identifiers used for whatever a create-table-as-select leaves unset.
/// They are handed to the catalog as-is.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct CtasOptions {
    #[builder(setter(into), default = "DEFAULT_INPUT_FORMAT.to_string()")]
    pub(crate) default_input_format: String,
    #[builder(setter(into), default = "DEFAULT_OUTPUT_FORMAT.to_string()")]
    pub(crate) default_output_format: String,
    #[builder(setter(into), default = "DEFAULT_SERDE.to_string()")]
    pub(crate) default_serde: String,
}

impl Default for CtasOptions {
    fn default() -> Self {
        Self {
            default_input_format: DEFAULT_INPUT_FORMAT.to_string(),
            default_output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            default_serde: DEFAULT_SERDE.to_string(),
        }
    }
}

impl CtasOptions {
    /// Fills every unset entry of `storage` with its default, keeping what the caller set.
    pub fn complete_storage(&self, storage: StorageFormat) -> StorageFormat {
        StorageFormat::new(
            storage
                .input_format
                .or_else(|| Some(self.default_input_format.clone())),
            storage
                .output_format
                .or_else(|| Some(self.default_output_format.clone())),
            storage.serde.or_else(|| Some(self.default_serde.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(
            CtasOptionsBuilder::default().build().unwrap(),
            CtasOptions::default()
        );
    }

    #[test]
    fn builder_overrides() {
        let options = CtasOptionsBuilder::default()
            .default_serde("org.apache.hadoop.hive.ql.io.orc.OrcSerde")
            .build()
            .unwrap();
        assert_eq!(options.default_serde, "org.apache.hadoop.hive.ql.io.orc.OrcSerde");
        assert_eq!(options.default_input_format, DEFAULT_INPUT_FORMAT);
        assert_eq!(options.default_output_format, DEFAULT_OUTPUT_FORMAT);
    }
}
