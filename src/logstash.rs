//! The Logstash node stats API
//!
//! See <https://www.elastic.co/guide/en/logstash/current/node-stats-api.html>.
//!
//! The same types decode the responses of Logstash 6, 7 and 8. Newer
//! versions only ever add fields, so everything is optional and missing
//! fields fall back to zero. The differences that matter for a check (e.g.
//! Logstash 6 not reporting a `status`) are dealt with by the checks, not
//! here.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::error::Error;

/// `GET /_node/stats`
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeStats {
    pub host: String,
    pub version: String,
    /// `green`, `yellow` or `red`. Not reported before Logstash 7.
    pub status: Option<String>,
    pub process: Process,
    pub jvm: Jvm,
    /// The leading number of `version`, 0 if there was no version
    #[serde(skip)]
    pub major_version: u32,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Process {
    pub open_file_descriptors: f64,
    pub peak_open_file_descriptors: f64,
    pub max_file_descriptors: f64,
    pub cpu: Cpu,
}

impl Process {
    /// Open file descriptors as a percentage of the limit
    ///
    /// Logstash 6 may not report the limit, which counts as nothing open.
    pub fn file_descriptors_percent(&self) -> f64 {
        if self.max_file_descriptors > 0.0 {
            self.open_file_descriptors / self.max_file_descriptors * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cpu {
    pub percent: f64,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Jvm {
    pub mem: JvmMem,
    pub threads: JvmThreads,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JvmMem {
    pub heap_used_percent: f64,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JvmThreads {
    pub count: i64,
    pub peak_count: i64,
}

/// Decode a `/_node/stats` response and work out the major version
pub fn decode_node_stats(body: &[u8]) -> Result<NodeStats, Error> {
    let mut stats: NodeStats = serde_json::from_slice(body)?;
    stats.major_version = major_version(&stats.version)?;
    Ok(stats)
}

fn major_version(version: &str) -> Result<u32, Error> {
    if version.is_empty() {
        return Ok(0);
    }
    let major = version.split('.').next().unwrap_or("");
    major.parse().map_err(|_| {
        tracing::warn!(version, "unparseable logstash version");
        Error::Version
    })
}

/// `GET /_node/stats/pipelines/[name]`
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineSet {
    pub host: String,
    pub version: String,
    pub pipelines: BTreeMap<String, PipelineStats>,
}

/// Decode a `/_node/stats/pipelines` response
pub fn decode_pipeline_set(body: &[u8]) -> Result<PipelineSet, Error> {
    Ok(serde_json::from_slice(body)?)
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineStats {
    pub events: Events,
    pub reloads: Reloads,
    pub queue: Queue,
    /// Only reported since Logstash 8.5
    pub flow: Flow,
}

impl PipelineStats {
    /// Events that have been received but not yet sent on
    pub fn inflight_events(&self) -> i64 {
        self.events.r#in - self.events.out
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Events {
    pub r#in: i64,
    pub out: i64,
    pub filtered: i64,
    pub duration_in_millis: i64,
    pub queue_push_duration_in_millis: i64,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reloads {
    pub successes: i64,
    pub failures: i64,
    /// RFC 3339, `null` until the first successful reload
    pub last_success_timestamp: Option<String>,
    /// RFC 3339, `null` until the first failed reload
    pub last_failure_timestamp: Option<String>,
    pub last_error: Option<serde_json::Value>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Queue {
    pub r#type: String,
    pub events_count: i64,
    pub queue_size_in_bytes: i64,
    pub max_queue_size_in_bytes: i64,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Flow {
    pub queue_backpressure: FlowMetric,
    pub input_throughput: FlowMetric,
    pub output_throughput: FlowMetric,
    pub filter_throughput: FlowMetric,
    pub worker_concurrency: FlowMetric,
}

/// A flow rate over several windows
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlowMetric {
    #[serde(deserialize_with = "null_as_zero")]
    pub current: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub last_1_minute: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub lifetime: f64,
}

/// Logstash reports rates it cannot compute yet as `null`
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    pub(crate) const STATS_V6: &str = r#"{"host":"logstash","version":"6.8.23","http_address":"0.0.0.0:9600","id":"123","name":"logstash","jvm":{"threads":{"count":1,"peak_count":2},"mem":{},"gc":{},"uptime_in_millis":123},"process":{},"events":{},"pipelines":{"main":{}},"reloads":{"failures":0,"successes":0},"os":{}}"#;

    pub(crate) const STATS_V7: &str = r#"{"host":"foobar","version":"7.17.8","status":"green","jvm":{"threads":{"count":50,"peak_count":51},"mem":{"heap_used_percent":20}},"process":{"open_file_descriptors": 120,"peak_open_file_descriptors": 120,"max_file_descriptors":16384,"cpu":{"percent": 1}}}"#;

    pub(crate) const PIPELINES_V8_FLOW: &str = r#"{"host":"foobar","version":"8.7.1","http_address":"127.0.0.1:9600","id":"4","name":"test","ephemeral_id":"5","status":"green","snapshot":false,"pipeline":{"workers":2,"batch_size":125,"batch_delay":50},"pipelines":{"ansible-input":{"flow":{"queue_backpressure":{"current":12.34,"last_1_minute":0,"lifetime":2.503e-05},"output_throughput":{"current":0,"last_1_minute":0.344,"lifetime":0.7051},"input_throughput":{"current":10,"last_1_minute":0.5734,"lifetime":1.089},"worker_concurrency":{"current":0.0001815,"last_1_minute":0.0009501,"lifetime":0.003384},"filter_throughput":{"current":0,"last_1_minute":0.5734,"lifetime":1.089}},"events":{"filtered":0,"duration_in_millis":0,"queue_push_duration_in_millis":0,"out":50,"in":100},"plugins":{"inputs":[{"id":"b","name":"beats","events":{"queue_push_duration_in_millis":0,"out":0}}],"codecs":[],"filters":[],"outputs":[{"id":"f","name":"redis","events":{"duration_in_millis":18,"out":50,"in":100}}]},"reloads":{"successes":0,"last_success_timestamp":null,"last_error":null,"last_failure_timestamp":null,"failures":0},"queue":{"type":"memory","events_count":0,"queue_size_in_bytes":0,"max_queue_size_in_bytes":0},"hash":"f","ephemeral_id":"f"}}}"#;

    pub(crate) const PIPELINES_V7: &str = r#"{"host":"foobar","version":"7.17.8","http_address":"127.0.0.1:9600","id":"4","name":"test","ephemeral_id":"5","status":"green","snapshot":false,"pipeline":{"workers":2,"batch_size":125,"batch_delay":50},"pipelines":{"localhost-input":{"events":{"filtered":0,"duration_in_millis":0,"queue_push_duration_in_millis":0,"out":50,"in":100},"plugins":{"inputs":[],"codecs":[],"filters":[],"outputs":[]},"reloads":{"successes":0,"last_success_timestamp":null,"last_error":null,"last_failure_timestamp":null,"failures":0},"queue":{"type":"memory","events_count":0,"queue_size_in_bytes":0,"max_queue_size_in_bytes":0},"hash":"f","ephemeral_id":"f"}}}"#;

    #[test]
    fn decodes_v7_node_stats() {
        let stats = decode_node_stats(STATS_V7.as_bytes()).unwrap();
        assert_eq!(stats.host, "foobar");
        assert_eq!(stats.major_version, 7);
        assert_eq!(stats.status.as_deref(), Some("green"));
        assert_eq!(stats.jvm.threads.count, 50);
        assert_eq!(stats.jvm.mem.heap_used_percent, 20.0);
        assert_eq!(stats.process.max_file_descriptors, 16384.0);
        assert_eq!(stats.process.cpu.percent, 1.0);
    }

    #[test]
    fn decodes_v6_node_stats_without_status() {
        let stats = decode_node_stats(STATS_V6.as_bytes()).unwrap();
        assert_eq!(stats.major_version, 6);
        assert_eq!(stats.status, None);
        assert_eq!(stats.process, Process::default());
        assert_eq!(stats.process.file_descriptors_percent(), 0.0);
    }

    #[test]
    fn version_must_start_with_a_number() {
        let err = decode_node_stats(br#"{"host":"logstash","version":"foo"}"#).unwrap_err();
        assert_eq!(err.to_string(), "could not determine version");
        let stats = decode_node_stats(br#"{"version":"8"}"#).unwrap();
        assert_eq!(stats.major_version, 8);
    }

    #[test]
    fn missing_version_is_zero() {
        let stats = decode_node_stats(br#"{"foo": "bar"}"#).unwrap();
        assert_eq!(stats.major_version, 0);
        assert_eq!(stats.status, None);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        match decode_node_stats(b"<html>nope</html>") {
            Err(Error::Decode(_)) => {}
            other => panic!("expected a decode error, got {:?}", other),
        }
    }

    #[test]
    fn file_descriptor_percentage() {
        let process = Process {
            open_file_descriptors: 45.0,
            max_file_descriptors: 100.0,
            ..Process::default()
        };
        assert_eq!(process.file_descriptors_percent(), 45.0);
    }

    #[test]
    fn decodes_pipeline_flow() {
        let set = decode_pipeline_set(PIPELINES_V8_FLOW.as_bytes()).unwrap();
        let pipe = &set.pipelines["ansible-input"];
        assert_eq!(pipe.flow.queue_backpressure.current, 12.34);
        assert_eq!(pipe.flow.input_throughput.current, 10.0);
        assert_eq!(pipe.flow.input_throughput.lifetime, 1.089);
        assert_eq!(pipe.inflight_events(), 50);
        assert_eq!(pipe.queue.r#type, "memory");
    }

    #[test]
    fn decodes_pipelines_without_flow() {
        let set = decode_pipeline_set(PIPELINES_V7.as_bytes()).unwrap();
        assert_eq!(set.host, "foobar");
        let pipe = &set.pipelines["localhost-input"];
        assert_eq!(pipe.flow, Flow::default());
        assert_eq!(pipe.reloads.last_success_timestamp, None);
        assert_eq!(pipe.events.r#in, 100);
    }

    #[test]
    fn null_rates_are_zero() {
        let set = decode_pipeline_set(
            br#"{"pipelines":{"main":{"flow":{"queue_backpressure":{"current":null,"lifetime":1.5}}}}}"#,
        )
        .unwrap();
        let metric = &set.pipelines["main"].flow.queue_backpressure;
        assert_eq!(metric.current, 0.0);
        assert_eq!(metric.lifetime, 1.5);
    }

    #[test]
    fn pipelines_are_ordered_by_name() {
        let set = decode_pipeline_set(br#"{"pipelines":{"zeta":{},"alpha":{},"mid":{}}}"#).unwrap();
        let names: Vec<_> = set.pipelines.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
