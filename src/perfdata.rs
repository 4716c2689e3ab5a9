//! Performance data, the part of plugin output after the `|`
//!
//! Each datum renders as `label=value[uom];[warn];[crit];[min];[max]`.
//! Empty trailing fields are dropped, empty fields in the middle are kept so
//! that the positions of the later fields still line up.

use std::fmt;

use itertools::Itertools;

use crate::threshold::Threshold;

/// One labelled measurement
#[derive(Debug, Clone, PartialEq)]
pub struct Perfdata {
    label: String,
    value: f64,
    uom: Option<&'static str>,
    warn: Option<Threshold>,
    crit: Option<Threshold>,
    min: Option<f64>,
    max: Option<f64>,
}

impl Perfdata {
    pub fn new<L: Into<String>>(label: L, value: f64) -> Perfdata {
        Perfdata {
            label: label.into(),
            value,
            uom: None,
            warn: None,
            crit: None,
            min: None,
            max: None,
        }
    }

    /// Set the unit of measurement, e.g. `%` or `c` for a counter
    pub fn uom(mut self, uom: &'static str) -> Perfdata {
        self.uom = Some(uom);
        self
    }

    pub fn thresholds(mut self, warn: &Threshold, crit: &Threshold) -> Perfdata {
        self.warn = Some(warn.clone());
        self.crit = Some(crit.clone());
        self
    }

    pub fn bounds(mut self, min: f64, max: f64) -> Perfdata {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

impl fmt::Display for Perfdata {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_label(f, &self.label)?;
        write!(f, "={}{}", self.value, self.uom.unwrap_or(""))?;

        let fields = [
            self.warn.as_ref().map(ToString::to_string),
            self.crit.as_ref().map(ToString::to_string),
            self.min.map(|v| v.to_string()),
            self.max.map(|v| v.to_string()),
        ];
        let used = fields
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1);
        for field in &fields[..used] {
            write!(f, ";{}", field.as_deref().unwrap_or(""))?;
        }
        Ok(())
    }
}

/// Labels containing spaces, `=` or quotes must be single quoted
fn write_label(f: &mut fmt::Formatter, label: &str) -> fmt::Result {
    if label.contains(|c: char| c == ' ' || c == '=' || c == '\'') {
        write!(f, "'{}'", label.replace('\'', "''"))
    } else {
        f.write_str(label)
    }
}

/// An ordered collection of `Perfdata`, rendered space separated
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerfdataList(Vec<Perfdata>);

impl PerfdataList {
    pub fn new() -> PerfdataList {
        PerfdataList(Vec::new())
    }

    pub fn push(&mut self, datum: Perfdata) {
        self.0.push(datum)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for PerfdataList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
