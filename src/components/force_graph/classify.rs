//! Node coloring by semantic category.
//!
//! Each node gets exactly one color, chosen by the first matching rule:
//!
//! 1. selected (identifier is in the selection set)
//! 2. identifier starts with `a`
//! 3. colorful mode: origin / non-origin
//! 4. identifier is all decimal digits
//! 5. default
//!
//! Rule 3 is checked before rule 4, so numeric identifiers are colored by
//! origin status whenever colorful mode is on.

use std::collections::HashMap;

use log::warn;

/// Fixed node palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeColor {
	/// Identifier is in the selection set.
	Selected,
	/// Identifier starts with `a`.
	PrefixA,
	/// Colorful mode, origin node.
	OriginActive,
	/// Colorful mode, non-origin node.
	OriginInactive,
	/// Identifier is all decimal digits.
	Numeric,
	/// Nothing else matched.
	Default,
}

impl NodeColor {
	/// CSS hex value for this color.
	pub const fn hex(self) -> &'static str {
		match self {
			NodeColor::Selected => "#ef4444",
			NodeColor::PrefixA => "#f59e0b",
			NodeColor::OriginActive => "#10b981",
			NodeColor::OriginInactive => "#c9351e",
			NodeColor::Numeric => "#4338ca",
			NodeColor::Default => "#9ca3af",
		}
	}
}

/// Inputs the classifier needs besides the node identifier.
#[derive(Clone, Copy, Debug)]
pub struct ClassifierContext<'a> {
	/// Externally selected identifiers. Duplicates are allowed.
	pub selected: &'a [String],
	/// Color by origin status instead of identifier pattern.
	pub colorful: bool,
	/// Origin flag per identifier, from the projected node list.
	pub origins: &'a HashMap<String, bool>,
}

/// `true` if `id` is one or more ASCII decimal digits and nothing else.
pub fn is_numeric_id(id: &str) -> bool {
	!id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Pick the display color for the node with identifier `id`.
pub fn classify(id: &str, ctx: &ClassifierContext<'_>) -> NodeColor {
	if ctx.selected.iter().any(|s| s == id) {
		return NodeColor::Selected;
	}
	if id.starts_with('a') {
		return NodeColor::PrefixA;
	}
	if ctx.colorful {
		let origin = match ctx.origins.get(id) {
			Some(&origin) => origin,
			None => {
				warn!("vc-graph: no origin flag for node '{}', treating as non-origin", id);
				false
			}
		};
		return if origin {
			NodeColor::OriginActive
		} else {
			NodeColor::OriginInactive
		};
	}
	if is_numeric_id(id) {
		return NodeColor::Numeric;
	}
	NodeColor::Default
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::sync::Once;

	use log::{Level, LevelFilter, Log, Metadata, Record};

	use super::*;

	thread_local! {
		static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
	}

	/// Collects records emitted on the current test thread.
	struct ThreadLogger;

	impl Log for ThreadLogger {
		fn enabled(&self, _: &Metadata<'_>) -> bool {
			true
		}

		fn log(&self, record: &Record<'_>) {
			RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
		}

		fn flush(&self) {}
	}

	fn capture_logs() {
		static INIT: Once = Once::new();
		INIT.call_once(|| {
			let _ = log::set_logger(&ThreadLogger);
			log::set_max_level(LevelFilter::Trace);
		});
		RECORDS.with(|r| r.borrow_mut().clear());
	}

	fn captured() -> Vec<(Level, String)> {
		RECORDS.with(|r| r.borrow().clone())
	}

	fn origins(entries: &[(&str, bool)]) -> HashMap<String, bool> {
		entries.iter().map(|&(k, v)| (k.to_string(), v)).collect()
	}

	#[test]
	fn precedence_without_colorful_mode() {
		let selected = vec!["x1".to_string()];
		let origins = origins(&[("x1", true), ("a7", false), ("42", true), ("foo", true)]);
		let ctx = ClassifierContext {
			selected: &selected,
			colorful: false,
			origins: &origins,
		};
		assert_eq!(classify("x1", &ctx), NodeColor::Selected);
		assert_eq!(classify("a7", &ctx), NodeColor::PrefixA);
		assert_eq!(classify("42", &ctx), NodeColor::Numeric);
		assert_eq!(classify("foo", &ctx), NodeColor::Default);
	}

	#[test]
	fn selection_beats_prefix_and_numeric() {
		let selected = vec!["a1".to_string(), "7".to_string()];
		let origins = HashMap::new();
		let ctx = ClassifierContext {
			selected: &selected,
			colorful: false,
			origins: &origins,
		};
		assert_eq!(classify("a1", &ctx), NodeColor::Selected);
		assert_eq!(classify("7", &ctx), NodeColor::Selected);
	}

	#[test]
	fn colorful_mode_overrides_numeric() {
		let origins = origins(&[("42", true), ("43", false), ("foo", false)]);
		let ctx = ClassifierContext {
			selected: &[],
			colorful: true,
			origins: &origins,
		};
		assert_eq!(classify("42", &ctx), NodeColor::OriginActive);
		assert_eq!(classify("43", &ctx), NodeColor::OriginInactive);
		assert_eq!(classify("foo", &ctx), NodeColor::OriginInactive);
	}

	#[test]
	fn prefix_beats_colorful_mode() {
		let origins = origins(&[("a2", true)]);
		let ctx = ClassifierContext {
			selected: &[],
			colorful: true,
			origins: &origins,
		};
		assert_eq!(classify("a2", &ctx), NodeColor::PrefixA);
	}

	#[test]
	fn unknown_id_in_colorful_mode_warns_and_is_non_origin() {
		capture_logs();
		let origins = HashMap::new();
		let ctx = ClassifierContext {
			selected: &[],
			colorful: true,
			origins: &origins,
		};
		assert_eq!(classify("ghost", &ctx), NodeColor::OriginInactive);

		let records = captured();
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].0, Level::Warn);
		assert!(records[0].1.contains("'ghost'"));
	}

	#[test]
	fn known_id_in_colorful_mode_does_not_warn() {
		capture_logs();
		let origins = origins(&[("7", true)]);
		let ctx = ClassifierContext {
			selected: &[],
			colorful: true,
			origins: &origins,
		};
		assert_eq!(classify("7", &ctx), NodeColor::OriginActive);
		assert!(captured().iter().all(|(level, _)| *level != Level::Warn));
	}

	#[test]
	fn selection_beats_colorful_mode() {
		let selected = vec!["42".to_string(), "a5".to_string(), "x".to_string()];
		let origins = origins(&[("42", true), ("a5", true), ("x", false)]);
		let ctx = ClassifierContext {
			selected: &selected,
			colorful: true,
			origins: &origins,
		};
		assert_eq!(classify("42", &ctx), NodeColor::Selected);
		assert_eq!(classify("a5", &ctx), NodeColor::Selected);
		assert_eq!(classify("x", &ctx), NodeColor::Selected);
	}

	#[test]
	fn prefix_is_case_sensitive() {
		let origins = HashMap::new();
		let ctx = ClassifierContext {
			selected: &[],
			colorful: false,
			origins: &origins,
		};
		assert_eq!(classify("A1", &ctx), NodeColor::Default);
	}

	#[test]
	fn numeric_pattern_is_whole_string() {
		assert!(is_numeric_id("0"));
		assert!(is_numeric_id("007"));
		assert!(!is_numeric_id(""));
		assert!(!is_numeric_id("12a"));
		assert!(!is_numeric_id("-3"));
		assert!(!is_numeric_id(" 3"));
		assert!(!is_numeric_id("٣"));
	}

	#[test]
	fn classification_is_stable() {
		let selected = vec!["b".to_string()];
		let origins = origins(&[("b", true), ("9", false)]);
		let ctx = ClassifierContext {
			selected: &selected,
			colorful: true,
			origins: &origins,
		};
		for id in ["b", "9", "a", "z"] {
			assert_eq!(classify(id, &ctx), classify(id, &ctx));
		}
	}

	#[test]
	fn palette_values() {
		assert_eq!(NodeColor::Selected.hex(), "#ef4444");
		assert_eq!(NodeColor::PrefixA.hex(), "#f59e0b");
		assert_eq!(NodeColor::OriginActive.hex(), "#10b981");
		assert_eq!(NodeColor::OriginInactive.hex(), "#c9351e");
		assert_eq!(NodeColor::Numeric.hex(), "#4338ca");
		assert_eq!(NodeColor::Default.hex(), "#9ca3af");
	}
}
