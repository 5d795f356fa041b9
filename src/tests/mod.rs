//! v8-symbolize tests module.


use std::cmp::Ordering;

use crate::alias::AliasDictionary;
use crate::decode::AddressDecoder;
use crate::error::Error;
use crate::session::{Frame, Session};
use crate::span::AddressSpan;
use crate::symbol::Symbol;
use crate::table::SymbolTable;
use crate::log;

fn lazy_compile() -> crate::alias::AliasEntry {
    let mut types = AliasDictionary::default();
    types.resolve("LazyCompile").clone()
}

fn apply(session: &mut Session, input: &str) -> Vec<Frame> {
    input
        .lines()
        .enumerate()
        .filter_map(|(i, line)| session.process_line(line, i + 1).unwrap())
        .collect()
}

#[test]
fn span_orders_disjoint_spans_by_start() {
    let a = AddressSpan::new(0, 10);
    let b = AddressSpan::new(20, 5);
    assert_eq!(a.overlap_cmp(&b), Ordering::Less);
    assert_eq!(b.overlap_cmp(&a), Ordering::Greater);
}

#[test]
fn span_overlap_is_a_match_in_both_directions() {
    let a = AddressSpan::new(100, 50);
    let b = AddressSpan::new(120, 10);
    assert_eq!(a.overlap_cmp(&b), Ordering::Equal);
    assert_eq!(b.overlap_cmp(&a), Ordering::Equal);

    // Touching endpoints count as overlap.
    let c = AddressSpan::new(150, 10);
    assert_eq!(a.overlap_cmp(&c), Ordering::Equal);
    assert_eq!(c.overlap_cmp(&a), Ordering::Equal);

    let d = AddressSpan::new(151, 10);
    assert_eq!(a.overlap_cmp(&d), Ordering::Less);
    assert_eq!(d.overlap_cmp(&a), Ordering::Greater);
}

#[test]
fn span_containment_excludes_the_end() {
    let span = AddressSpan::new(100, 50);
    assert!(!span.contains(99));
    assert!(span.contains(100));
    assert!(span.contains(149));
    assert!(!span.contains(150));
}

#[test]
fn decoder_accumulates_deltas_per_stream() {
    let mut decoder = AddressDecoder::default();
    assert_eq!(decoder.decode("code", 10), 10);
    assert_eq!(decoder.decode("code", -3), 7);
    assert_eq!(decoder.decode("code", 7), 14);

    // A fresh stream starts from zero regardless of the first one.
    assert_eq!(decoder.decode("stack", 5), 5);
    assert_eq!(decoder.decode("code", 1), 15);
}

#[test]
fn decoder_handles_absolute_and_delta_fields() {
    let mut decoder = AddressDecoder::default();
    assert_eq!(decoder.decode_field("code", "0x1000", 1).unwrap(), 0x1000);
    assert_eq!(decoder.decode_field("code", "+10", 2).unwrap(), 0x1010);
    assert_eq!(decoder.decode_field("code", "-8", 3).unwrap(), 0x1008);
    assert_eq!(decoder.decode_field("code", "2a", 4).unwrap(), 0x2a);

    let err = decoder.decode_field("code", "bogus!", 5);
    assert!(matches!(err, Err(Error::AddressParsing(_, 5))));
}

#[test]
fn alias_round_trip_returns_the_same_code() {
    let mut dict = AliasDictionary::default();
    let value = dict.resolve("LazyCompile").value();
    assert_eq!(dict.lookup_by_value(value).unwrap().name(), "LazyCompile");
    assert_eq!(dict.resolve("LazyCompile").value(), value);
    assert_eq!(dict.len(), 1);

    assert_ne!(dict.resolve("Builtin").value(), value);
    assert_eq!(dict.len(), 2);
    assert!(dict.lookup_by_value(7).is_none());
}

#[test]
fn symbol_name_parsing() {
    let sym = Symbol::new("foo bar.js:42", lazy_compile(), 0, 1);
    assert_eq!(sym.name(), "foo");
    assert_eq!(sym.resource_url(), "bar.js");
    assert_eq!(sym.resource_line(), 42);

    let sym = Symbol::new("foo bar.js", lazy_compile(), 0, 1);
    assert_eq!(sym.resource_url(), "bar.js");
    assert_eq!(sym.resource_line(), 0);

    let sym = Symbol::new("foo", lazy_compile(), 0, 1);
    assert_eq!(sym.name(), "foo");
    assert_eq!(sym.resource_url(), "");
    assert_eq!(sym.resource_line(), 0);
}

#[test]
fn symbol_name_parsing_noise_is_normalized() {
    // Non-numeric suffix after the last colon: the whole token is the URL.
    let sym = Symbol::new("foo bar.js:xx", lazy_compile(), 0, 1);
    assert_eq!(sym.resource_url(), "bar.js:xx");
    assert_eq!(sym.resource_line(), 0);

    // A colon at the start of the token cannot introduce a line number.
    let sym = Symbol::new("foo :42", lazy_compile(), 0, 1);
    assert_eq!(sym.resource_url(), ":42");
    assert_eq!(sym.resource_line(), 0);
}

#[test]
fn symbol_relocation_keeps_everything_but_the_address() {
    let sym = Symbol::new("foo bar.js:42", lazy_compile(), 0x1000, 0x20);
    let moved = sym.relocated(0x2000);
    assert_eq!(moved.name(), "foo");
    assert_eq!(moved.span().address(), 0x2000);
    assert_eq!(moved.span().length(), 0x20);
}

#[test]
fn table_insert_then_lookup() {
    let mut table = SymbolTable::new();
    table.insert(Symbol::new("foo", lazy_compile(), 100, 50));

    assert_eq!(table.lookup(120).unwrap().name(), "foo");
    assert!(table.lookup(99).is_none());
    assert!(table.lookup(150).is_none());
}

#[test]
fn table_remove_then_lookup() {
    let mut table = SymbolTable::new();
    table.insert(Symbol::new("foo", lazy_compile(), 100, 50));

    let removed = table.remove(&AddressSpan::new(120, 0));
    assert_eq!(removed.unwrap().name(), "foo");
    assert!(table.lookup(120).is_none());
    assert!(table.is_empty());

    // Removing a span with no match is a no-op.
    assert!(table.remove(&AddressSpan::new(120, 0)).is_none());
}

#[test]
fn table_overlapping_insert_overwrites() {
    let mut table = SymbolTable::new();
    table.insert(Symbol::new("old", lazy_compile(), 100, 50));
    table.insert(Symbol::new("new", lazy_compile(), 120, 60));

    assert_eq!(table.len(), 1);
    assert!(table.lookup(110).is_none());
    assert_eq!(table.lookup(130).unwrap().name(), "new");

    table.insert(Symbol::new("newer", lazy_compile(), 120, 60));
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup(130).unwrap().name(), "newer");
}

#[test]
fn split_fields_keeps_quoted_name_whole() {
    let fields = log::split_fields(r#"code-creation,LazyCompile,0x2a8f0560,1307,"foo, bar baz.js:3""#);
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[0], "code-creation");
    assert_eq!(fields[3], "1307");
    assert_eq!(fields[4], "foo, bar baz.js:3");
}

#[test]
fn session_resolves_creation_and_delete() {
    let mut session = Session::new();
    let frames = apply(
        &mut session,
        "code-creation,LazyCompile,0x3e8,50,\"compute app.js:10\"\n\
         tick,0x401\n\
         code-delete,0x3e8\n\
         tick,0x401\n",
    );

    assert_eq!(frames.len(), 2);
    let symbol = frames[0].symbol().unwrap();
    assert_eq!(frames[0].address(), 1025);
    assert_eq!(symbol.name(), "compute");
    assert_eq!(symbol.resource_url(), "app.js");
    assert_eq!(symbol.resource_line(), 10);
    assert_eq!(symbol.symbol_type().name(), "LazyCompile");

    assert!(!frames[1].is_resolved());
    assert!(session.resolve(1025).is_none());
}

#[test]
fn session_skips_unknown_records() {
    let mut session = Session::new();
    // Unrelated record kinds and never-assigned alias codes are skipped.
    assert!(session.process_line("shared-library,\"/usr/lib/libc.so\",0x100,0x200", 1).unwrap().is_none());
    assert!(session.process_line("7,0x100,1", 2).unwrap().is_none());
    assert!(session.process_line("", 3).unwrap().is_none());
}

#[test]
fn session_rejects_malformed_records() {
    let mut session = Session::new();
    let err = session.process_line("code-creation,LazyCompile,0x100", 1);
    assert!(matches!(err, Err(Error::LogParsing(_, 1))));

    let err = session.process_line("code-creation,LazyCompile,0x100,many,\"foo\"", 2);
    assert!(matches!(err, Err(Error::LogParsing(_, 2))));
}

#[test]
fn resolve_integral() {
    let mut session = Session::new();
    let frames = apply(&mut session, mock::SIMPLE_LOG);

    let output: String = frames.iter().map(|f| format!("{}\n", f)).collect();
    assert_eq!(output, mock::SIMPLE_RESOLVED);
    assert_eq!(session.total_samples(), 6);
    assert_eq!(session.resolved_samples(), 4);
}

#[test]
fn dump_integral() {
    let mut session = Session::new();
    apply(&mut session, mock::SIMPLE_LOG);

    let mut output = Vec::<u8>::new();
    session.symbols().write_table(&mut output).unwrap();
    assert_eq!(std::str::from_utf8(&output).unwrap(), mock::SIMPLE_TABLE);
}
