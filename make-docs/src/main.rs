//! Regenerate `src/scripts.rs` from the `--help` of every check-logstash command
//!
//! Run from the repository root after `cargo build`:
//!
//! ```plain
//! $ cargo run -p make-docs > src/scripts.rs
//! ```

use std::process::Command;

const BINARY: &str = "target/debug/check-logstash";

struct Check {
    /// Subcommand path below the binary, empty for the binary itself
    args: &'static [&'static str],
    about: &'static str,
}

impl Check {
    fn name(&self) -> String {
        let mut name = String::from("check-logstash");
        for arg in self.args {
            name.push(' ');
            name.push_str(arg);
        }
        name
    }

    /// Markdown anchor for the heading
    fn anchor(&self) -> String {
        self.name().replace(' ', "-")
    }
}

fn main() {
    let preamble = "Usage of check-logstash and each of its checks\n\
                    \n\
                    Every check exits 0 for OK, 1 for WARNING, 2 for CRITICAL and 3 for UNKNOWN.";

    let checks = [
        Check {
            args: &[],
            about: "Global flags go before the check name.",
        },
        Check {
            args: &["health"],
            about: "Node status, heap, CPU and open file descriptors. Thresholds are percentages.",
        },
        Check {
            args: &["pipeline"],
            about: "Inflight events per pipeline. Both thresholds are required.",
        },
        Check {
            args: &["pipeline", "reload"],
            about: "Whether the last configuration reload of each pipeline succeeded.",
        },
        Check {
            args: &["pipeline", "flow"],
            about: "Queue backpressure per pipeline, needs Logstash 8.5 or newer. \
                    Both thresholds are required.",
        },
    ];

    let mut out: String = cp(preamble.split('\n'));
    out.push_str("\n//!\n");
    out.push_str(&cp(checks
        .iter()
        .map(|c| format!("- [{}](#{})", c.name(), c.anchor()))));
    out.push_str("\n");
    for check in &checks {
        let name = check.name();
        out.push_str(&format!(
            "\
//!
//! # {0}
//!
//! {1}
//!
//! ```plain
//! $ {0} --help
",
            name, check.about
        ));
        let cout = String::from_utf8(
            Command::new(BINARY)
                .args(check.args)
                .arg("--help")
                .env("TERM", "dumb")
                .output()
                .unwrap_or_else(|e| panic!("Couldn't execute {}: {}", name, e))
                .stdout,
        )
        .unwrap_or_else(|e| panic!("Couldn't convert {} help to utf8: {}", name, e));
        out.push_str(&cp(cout.trim_end().split('\n')));
        out.push_str("\n//! ```\n");
    }
    print!("{}", out);
}

/// Comment each line in the iterator
fn cp<S: AsRef<str>, I: Iterator<Item = S>>(s: I) -> String {
    s.map(|s| format!("//! {}", s.as_ref()))
        .map(|s| s.trim().into())
        .collect::<Vec<String>>()
        .join("\n")
}
