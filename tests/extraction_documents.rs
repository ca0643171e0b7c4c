//! End-to-end extraction tests over whole documents
//!
//! Each document is wrapped in a module declaration and a single record block, then run
//! through the default extractor.

use namedfields::{extract, Engine, ExtractError, Extractor, Missing};
use rstest::rstest;

fn document(body: &str) -> String {
    format!("module Test;\n\nexport {{\n\ttype Info: record {{\n{}\t}};\n}}\n", body)
}

fn triples(source: &str) -> Vec<(String, String, usize)> {
    extract(source.as_bytes())
        .expect("extraction to succeed")
        .fields()
        .iter()
        .map(|f| (f.name.clone(), f.data_type.clone(), f.index))
        .collect()
}

#[test]
fn test_conn_id_expands_into_four_fields() {
    let group = extract(document("id: conn_id\nstat: count\n").as_bytes())
        .expect("extraction to succeed");
    assert_eq!(group.name(), "Test");
    insta::assert_debug_snapshot!(group.fields(), @r###"
    [
        Field {
            name: "src",
            data_type: "ip",
            index: 0,
        },
        Field {
            name: "src_port",
            data_type: "port",
            index: 1,
        },
        Field {
            name: "dst",
            data_type: "ip",
            index: 2,
        },
        Field {
            name: "dst_port",
            data_type: "port",
            index: 3,
        },
        Field {
            name: "stat",
            data_type: "count",
            index: 4,
        },
    ]
    "###);
}

#[test]
fn test_plain_fields_keep_declaration_order() {
    assert_eq!(
        triples(&document("name: string\nage: count\n")),
        vec![
            ("name".to_string(), "string".to_string(), 0),
            ("age".to_string(), "count".to_string(), 1),
        ]
    );
}

#[rstest]
#[case::single_token("badline\n")]
#[case::after_good_lines("ts: time &log;\nbadline\nuid: string &log;\n")]
#[case::attribute_continuation("ts: time\n\t&log;\n")]
fn test_malformed_line_fails_whole_document(#[case] body: &str) {
    let err = extract(document(body).as_bytes()).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, ExtractError::NotFound(Missing::FieldLine { .. })));
}

#[rstest]
#[case::no_module("type Info: record {\n\tts: time;\n};\n")]
#[case::module_without_semicolon("module Test\ntype Info: record {\n\tts: time;\n};\n")]
#[case::qualified_module("module Foo::Bar;\ntype Info: record {\n\tts: time;\n};\n")]
#[case::module_in_comment("# module Test;\ntype Info: record {\n\tts: time;\n};\n")]
fn test_missing_module(#[case] source: &str) {
    let err = extract(source.as_bytes()).unwrap_err();
    assert!(matches!(err, ExtractError::NotFound(Missing::Module)));
}

#[rstest]
#[case::no_block("module Test;\n")]
#[case::not_a_record("module Test;\ntype Kind: enum { A, B };\n")]
#[case::unterminated("module Test;\ntype Info: record {\n\tts: time;\n")]
#[case::missing_semicolon("module Test;\ntype Info: record {\n\tts: time;\n}\n")]
fn test_missing_record(#[case] source: &str) {
    let err = extract(source.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::NotFound(Missing::Record { name: None })
    ));
}

#[rstest]
#[case::blank_lines("\n\nts: time\n\n\nuid: string\n\n", 2)]
#[case::comments("## Doc\nts: time\n# uid: string\n", 1)]
#[case::one_conn_id("ts: time\nid: conn_id &log;\n", 5)]
#[case::two_conn_ids("id: conn_id\nother_id: conn_id\n", 5)]
fn test_field_count(#[case] body: &str, #[case] expected: usize) {
    assert_eq!(triples(&document(body)).len(), expected);
}

#[test]
fn test_realistic_script() {
    let source = r#"##! Implements base functionality for connection analysis.

@load base/utils/site

module Conn;

export {
	## The connection logging stream identifier.
	redef enum Log::ID += { LOG };

	## The record type which contains column fields of the connection log.
	type Info: record {
		## This is the time of the first packet.
		ts:           time            &log;
		## A unique identifier of the connection.
		uid:          string          &log;
		## The connection's 4-tuple of endpoint addresses/ports.
		id:           conn_id         &log;
		## The transport layer protocol of the connection.
		proto:        transport_proto &log;
		## An identification of an application protocol being sent in
		## the connection.
		service:      string          &log &optional;
	};

	## Event that can be handled to access the :bro:type:`Conn::Info`
	## record as it is sent on to the logging framework.
	global log_conn: event(rec: Info);
}
"#;
    let group = extract(source.as_bytes()).expect("extraction to succeed");
    assert_eq!(group.name(), "Conn");
    assert_eq!(group.engine(), Engine::Fields);
    assert_eq!(group.delimiter(), "\t");
    let names: Vec<&str> = group.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["ts", "uid", "src", "src_port", "dst", "dst_port", "proto", "service"]
    );
    assert_eq!(group.field("service").map(|f| f.index), Some(7));
}

#[rstest]
#[case::multi_line_record(
    "ts: time &log;\ninner: record {\n\ta: count;\n\tb: string;\n};\nlast: string;\n",
    &["ts", "inner", "last"]
)]
#[case::initializer_over_several_lines(
    "ts: time &log;\nopts: set[string] &redef &default = {\n\t\"x\",\n\t\"}\"\n};\nlast: string;\n",
    &["ts", "opts", "last"]
)]
#[case::deeper_nesting(
    "outer: record {\n\tmid: record {\n\t\tleaf: count;\n\t};\n};\nid: conn_id &log;\n",
    &["outer", "src", "src_port", "dst", "dst_port"]
)]
fn test_nested_blocks_stay_with_their_declaration(#[case] body: &str, #[case] expected: &[&str]) {
    let names: Vec<String> = triples(&document(body))
        .into_iter()
        .map(|(name, _, _)| name)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_first_record_wins_by_default() {
    let source = "module Test;\ntype A: record {\n\ta: count;\n};\ntype B: record {\n\tb: count;\n};\n";
    let group = extract(source.as_bytes()).expect("extraction to succeed");
    assert_eq!(group.fields()[0].name, "a");

    let group = Extractor::new()
        .with_record("B")
        .extract(source.as_bytes())
        .expect("extraction to succeed");
    assert_eq!(group.fields()[0].name, "b");
}
