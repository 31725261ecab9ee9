//! Prints a short summary of a grown tree to stdout.

use colored::Colorize;

use std::time::Duration;

const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;

/// Shape statistics of a grown tree,
/// printed by `DecisionTree::fit` when the `verbose` knob is set.
pub(crate) struct FitReport {
    pub(crate) n_sample: usize,
    pub(crate) n_feature: usize,
    pub(crate) depth: usize,
    pub(crate) n_leaves: usize,
    pub(crate) elapsed: Duration,
}

impl FitReport {
    pub(crate) fn print_stats(&self) {
        println!("{:=>FULL_WIDTH$}", "");
        let header = format!("{:^FULL_WIDTH$}", "STATS");
        println!("{}", header.bold());
        println!("{:->FULL_WIDTH$}", "");

        print_item("# of training rows", &self.n_sample.to_string());
        print_item("# of features", &self.n_feature.to_string());
        print_item("Tree depth", &self.depth.to_string());
        print_item("# of leaves", &self.n_leaves.to_string());
        print_item("Fitting time", &time_format(self.elapsed.as_millis()));

        println!("{:=^FULL_WIDTH$}", "");
    }
}

fn print_item(key: &str, value: &str) {
    // Pad before coloring; the escape sequences have nonzero width.
    let key = format!("{key:<STAT_WIDTH$}");
    let value = format!("{value:>STAT_WIDTH$}");
    println!("+ {}\t{}", key.bold(), value.bold().green());
}

/// Converts `millis` to a human-readable string.
fn time_format(millis: u128) -> String {
    if millis < 1_000 {
        format!("0.{millis:0>3}s")
    } else if millis < 60_000 {
        let sec = millis / 1_000;
        let millis = millis % 1_000;
        format!("{sec}.{millis:0>3}s")
    } else {
        let min = millis / 60_000;
        let sec = (millis % 60_000) / 1_000;
        format!("{min}m {sec:0>2}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format_01() {
        let result = time_format(250);
        let expect = "0.250s";
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }

    #[test]
    fn test_time_format_02() {
        let result = time_format(2_300);
        let expect = "2.300s";
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }

    #[test]
    fn test_time_format_03() {
        let result = time_format(61_500);
        let expect = "1m 01s";
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }
}
