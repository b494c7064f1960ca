use postlette_primitives::Range;
use postlette_styles::{Style, encode};
use pretty_assertions::assert_eq;

use super::*;
use crate::Buffer;
use crate::transform::TransformOutcome;

fn selected_all(text: &str) -> Buffer {
	let mut buffer = Buffer::from_text(text);
	buffer.select_all();
	buffer
}

fn at_end(text: &str) -> Buffer {
	let mut buffer = Buffer::from_text(text);
	buffer.move_to_end();
	buffer
}

#[test]
fn parse_priority_and_parts() {
	let item = parse_line("  12. twelve").unwrap();
	assert_eq!(item.indent, "  ");
	assert_eq!(item.marker, "12. ");
	assert_eq!(item.prefix, ListPrefix::Number(12));
	assert_eq!(item.rest, "twelve");

	assert_eq!(parse_line("• x").unwrap().prefix, ListPrefix::Bullet);
	assert_eq!(parse_line("\t- x").unwrap().prefix, ListPrefix::Dash);
	assert_eq!(parse_line("1.\tx").unwrap().marker, "1.\t");
	assert_eq!(parse_line("- 3. x").unwrap().prefix, ListPrefix::Dash);
	assert_eq!(parse_line("-x"), None);
	assert_eq!(parse_line("1.x"), None);
	assert_eq!(parse_line("plain"), None);
	assert_eq!(parse_line("a - b"), None);
}

#[test]
fn non_ascii_digits_are_not_numbers() {
	assert_eq!(parse_line("١. x"), None);

	let mut buffer = at_end("١. item");
	assert_eq!(handle_line_break(&mut buffer), LineBreak::Plain);
	assert_eq!(buffer.contents(), "١. item\n");
}

#[test]
fn huge_numbers_saturate_and_stop() {
	let item = parse_line("99999999999999999999999. x").unwrap();
	assert_eq!(item.prefix, ListPrefix::Number(u64::MAX));
	assert_eq!(item.prefix.next(), None);
	assert_eq!(ListPrefix::Number(9).next(), Some(ListPrefix::Number(10)));
	assert_eq!(ListPrefix::Bullet.next(), Some(ListPrefix::Bullet));
}

#[test]
fn prefix_at_counts_from_one() {
	assert_eq!(ListStyle::Numbers.prefix_at(0), ListPrefix::Number(1));
	assert_eq!(ListStyle::Numbers.prefix_at(4).literal(), "5. ");
	assert_eq!(ListStyle::Bullets.prefix_at(7), ListPrefix::Bullet);
	assert_eq!(ListStyle::Dashes.prefix_at(0).literal(), "- ");
}

#[test]
fn normalize_folds_paragraph_separators() {
	assert_eq!(normalize_line_breaks("a\u{2029}b\r\nc\rd\u{2028}e"), "a\nb\nc\nd\ne");
	assert!(matches!(normalize_line_breaks("a\nb"), std::borrow::Cow::Borrowed(_)));
}

#[test]
fn rewrite_numbers_bullets_dashes() {
	assert_eq!(rewrite_lines("a\nb\nc", ListStyle::Numbers), "1. a\n2. b\n3. c");
	assert_eq!(rewrite_lines("a\nb\nc", ListStyle::Bullets), "• a\n• b\n• c");
	assert_eq!(rewrite_lines("1. a\n2. b\n3. c", ListStyle::Dashes), "- a\n- b\n- c");
	assert_eq!(rewrite_lines("• bold\n• italics\n• both", ListStyle::Numbers), "1. bold\n2. italics\n3. both");
}

#[test]
fn rewrite_keeps_indent_and_drops_trailing_break() {
	assert_eq!(rewrite_lines("  • a\n\tb\n", ListStyle::Numbers), "  1. a\n\t2. b");
	assert_eq!(rewrite_lines("a\u{2029}b", ListStyle::Dashes), "- a\n- b");
	assert_eq!(rewrite_lines("", ListStyle::Bullets), "");
}

#[test]
fn unstyle_with_lists_strips_then_decodes() {
	assert_eq!(unstyle_with_lists("1. First\n• Second\n- Third"), "First\nSecond\nThird");

	let styled = format!("• {}\n  2. {}", encode(Style::Bold, "bold"), encode(Style::Italic, "hi"));
	assert_eq!(unstyle_with_lists(&styled), "bold\n  hi");
	assert_eq!(strip_list_prefixes("no list"), "no list");
}

#[test]
fn insert_list_over_selection_reselects_output() {
	let mut buffer = selected_all("a\nb\nc");
	let outcome = insert_list(&mut buffer, ListStyle::Numbers);
	assert_eq!(buffer.contents(), "1. a\n2. b\n3. c");
	assert_eq!(outcome, TransformOutcome::Applied { selection: Range::new(0, 14) });
	assert_eq!(buffer.selected_text().as_deref(), Some("1. a\n2. b\n3. c"));

	insert_list(&mut buffer, ListStyle::Dashes);
	assert_eq!(buffer.contents(), "- a\n- b\n- c");
}

#[test]
fn insert_list_on_cursor_line() {
	let mut buffer = Buffer::from_text("hello");
	insert_list(&mut buffer, ListStyle::Dashes);
	assert_eq!(buffer.contents(), "- hello");
	assert_eq!(buffer.cursor(), 2);

	let mut buffer = Buffer::from_text("hello");
	insert_list(&mut buffer, ListStyle::Numbers);
	assert_eq!(buffer.contents(), "1. hello");
}

#[test]
fn insert_list_replaces_marker_and_keeps_cursor_in_content() {
	let mut buffer = at_end("• item");
	insert_list(&mut buffer, ListStyle::Dashes);
	assert_eq!(buffer.contents(), "- item");
	assert_eq!(buffer.cursor(), 6);

	let mut buffer = Buffer::from_text("x\n  - item\ny");
	buffer.set_cursor(7);
	insert_list(&mut buffer, ListStyle::Numbers);
	assert_eq!(buffer.contents(), "x\n  1. item\ny");
	assert_eq!(buffer.cursor(), 8);
}

#[test]
fn continue_numbered_list() {
	let mut buffer = at_end("1. item");
	assert_eq!(handle_line_break(&mut buffer), LineBreak::Continued(ListPrefix::Number(2)));
	assert_eq!(buffer.contents(), "1. item\n2. ");
	assert_eq!(buffer.cursor(), buffer.len_chars());
}

#[test]
fn continue_bullets_and_dashes_with_indent() {
	let mut buffer = at_end("• item");
	handle_line_break(&mut buffer);
	assert_eq!(buffer.contents(), "• item\n• ");

	let mut buffer = at_end("  - item");
	assert_eq!(handle_line_break(&mut buffer), LineBreak::Continued(ListPrefix::Dash));
	assert_eq!(buffer.contents(), "  - item\n  - ");
}

#[test]
fn empty_item_exits_list() {
	let mut buffer = at_end("• ");
	assert_eq!(handle_line_break(&mut buffer), LineBreak::Exited);
	assert_eq!(buffer.contents(), "\n");
	assert_eq!(buffer.cursor(), 1);

	let mut buffer = at_end("a\n    3.   ");
	assert_eq!(handle_line_break(&mut buffer), LineBreak::Exited);
	assert_eq!(buffer.contents(), "a\n    \n");
	assert_eq!(buffer.cursor(), 7);
}

#[test]
fn plain_break_off_end_or_outside_list() {
	let mut buffer = Buffer::from_text("1. item");
	buffer.set_cursor(4);
	assert_eq!(handle_line_break(&mut buffer), LineBreak::Plain);
	assert_eq!(buffer.contents(), "1. i\ntem");

	let mut buffer = at_end("plain");
	assert_eq!(handle_line_break(&mut buffer), LineBreak::Plain);
	assert_eq!(buffer.contents(), "plain\n");
}

#[test]
fn break_replaces_selection() {
	let mut buffer = Buffer::from_text("• item");
	buffer.set_selection(Range::new(6, 2));
	assert_eq!(handle_line_break(&mut buffer), LineBreak::Plain);
	assert_eq!(buffer.contents(), "• \n");
	assert_eq!(buffer.cursor(), 3);
}

#[test]
fn saturated_number_breaks_plainly() {
	let mut buffer = at_end("18446744073709551615. x");
	assert_eq!(handle_line_break(&mut buffer), LineBreak::Plain);
	assert_eq!(buffer.contents(), "18446744073709551615. x\n");
}

mod props {
	use proptest::prelude::*;

	use super::super::*;

	fn lines() -> impl Strategy<Value = Vec<String>> {
		prop::collection::vec("[ \t]{0,2}(• |- |[0-9]{1,3}\\. )?[a-z •.-]{0,8}", 1..8)
	}

	proptest! {
		#[test]
		fn numbered_rewrite_counts_every_line(lines in lines()) {
			let text = lines.join("\n");
			let out = rewrite_lines(&text, ListStyle::Numbers);
			let out_lines: Vec<&str> = out.lines().collect();
			prop_assert_eq!(out_lines.len(), text.lines().count());
			for (idx, line) in out_lines.iter().enumerate() {
				let item = parse_line(line).expect("rewritten line is a list line");
				prop_assert_eq!(item.prefix, ListPrefix::Number(idx as u64 + 1));
			}
		}

		#[test]
		fn rewrite_only_touches_markers(lines in lines(), style in prop_oneof![
			Just(ListStyle::Bullets),
			Just(ListStyle::Numbers),
			Just(ListStyle::Dashes),
		]) {
			let text = lines.join("\n");
			prop_assert_eq!(strip_list_prefixes(&rewrite_lines(&text, style)), strip_list_prefixes(&text));
		}
	}
}
