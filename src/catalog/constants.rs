pub const DEFAULT_DATABASE: &str = "default";

pub const DEFAULT_INPUT_FORMAT: &str = "org.apache.hadoop.mapred.TextInputFormat";
pub const DEFAULT_OUTPUT_FORMAT: &str = "org.apache.hadoop.hive.ql.io.HiveIgnoreKeyTextOutputFormat";
pub const DEFAULT_SERDE: &str = "org.apache.hadoop.hive.serde2.lazy.LazySimpleSerDe";
