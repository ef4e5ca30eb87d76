use std::{
    fs,
    io::{self, Write},
};

use mao::{
    error::{DeclarationError, Error, ParseError, RuntimeError},
    run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn demo_programs_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "mao"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let (output, diagnostics, result) = execute(&source);
        if let Err(e) = result {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(diagnostics, "", "diagnostics of {path:?}");
        assert_eq!(output, expected, "output of {path:?}");
    }

    assert!(count > 0, "No demo programs found in demos");
}

fn execute(source: &str) -> (String, String, Result<(), Error>) {
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();
    let result = run(source, &mut out, &mut diagnostics);
    (String::from_utf8(out).unwrap(), String::from_utf8(diagnostics).unwrap(), result)
}

fn assert_output(src: &str, expected: &str) {
    let (output, _, result) = execute(src);
    if let Err(e) = result {
        panic!("Script failed: {e}");
    }
    assert_eq!(output, expected);
}

fn failure(src: &str) -> Error {
    match execute(src).2 {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn print_formats_numbers_by_type() {
    assert_output("print(42);", "42\n");
    assert_output("print(1.5);", "1.500000\n");
    assert_output("print(-0.25);", "-0.250000\n");
    assert_output("print(1 / 3.0);", "0.333333\n");
}

#[test]
fn print_writes_strings_verbatim() {
    assert_output(r#"print("x"); print("y");"#, "xy");
    assert_output(r#"print("a\tb\n");"#, "a\tb\n");
}

#[test]
fn print_semicolon_is_optional() {
    assert_output("print(1) print(2)", "1\n2\n");
}

#[test]
fn declared_variables_start_at_zero() {
    assert_output("int a; double b; print(a); print(b);", "0\n0.000000\n");
    assert_output("int a, b, c; print(a + b + c);", "0\n");
}

#[test]
fn stray_semicolons_are_skipped() {
    assert_output(";;int a;; a = 2;; print(a);", "2\n");
}

#[test]
fn comments_are_ignored() {
    assert_output("// leading\nint a; /* multi\nline */ a = 3; print(a); // trailing",
                  "3\n");
}

#[test]
fn redeclaration_is_rejected() {
    assert!(matches!(failure("int a; double a;"),
                     Error::Declaration(DeclarationError::Redefinition { ref name, line: 1 })
                     if name == "a"));
    assert!(matches!(failure("int a,\n a;"),
                     Error::Declaration(DeclarationError::Redefinition { line: 2, .. })));
}

#[test]
fn malformed_declarations_are_rejected() {
    assert!(matches!(failure("int ;"),
                     Error::Parse(ParseError::ExpectedIdentifier { .. })));
    assert!(matches!(failure("double 3;"),
                     Error::Parse(ParseError::ExpectedIdentifier { .. })));
    assert!(matches!(failure("int a b;"),
                     Error::Parse(ParseError::ExpectedSeparator { .. })));
}

#[test]
fn statements_need_a_semicolon() {
    assert!(matches!(failure("int a;\na = 1"),
                     Error::Parse(ParseError::MissingSemicolon { line: 2 })));
}

#[test]
fn unknown_statement_start_is_rejected() {
    assert!(matches!(failure("int a; , a = 1;"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(failure("print 1;"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(failure("print(1;"),
                     Error::Parse(ParseError::ExpectedClosingParen { .. })));
}

#[test]
fn undeclared_variables_are_rejected() {
    assert!(matches!(failure("a = 1;"),
                     Error::Parse(ParseError::UndefinedVariable { .. })));
}

#[test]
fn output_before_a_failure_is_kept() {
    let (output, _, result) = execute("print(1);\nprint(1 / 0);\nprint(2);");
    assert_eq!(output, "1\n");
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::DivisionByZero { line: 2 }))));
}

#[test]
fn lexical_errors_do_not_stop_execution() {
    let (output, diagnostics, result) = execute("int a; a = 2 $ ; print(a);");
    assert!(result.is_ok());
    assert_eq!(output, "2\n");
    assert_eq!(diagnostics, "Error #1: line 1: Unknown character '$'.\n");

    let (output, diagnostics, result) = execute("print(\"abc\n);");
    assert!(result.is_ok());
    assert_eq!(output, "abc");
    assert_eq!(diagnostics, "Error #1: line 1: Unterminated string.\n");

    let (output, diagnostics, result) = execute("print(1); /* never closed\nprint(2);");
    assert!(result.is_ok());
    assert_eq!(output, "1\n");
    assert_eq!(diagnostics, "Error #1: line 1: Unterminated comment.\n");
}

#[test]
fn oversized_literals_are_reported() {
    let (_, diagnostics, result) = execute("int a; a = 99999999999999999999;");
    assert_eq!(diagnostics,
               "Error #1: line 1: Number '99999999999999999999' is too large.\n");
    assert!(matches!(result, Err(Error::Parse(ParseError::MissingOperand { .. }))));
}

#[test]
fn error_messages_name_the_line() {
    let error = failure("int a;\n\na = 1 / 0;");
    assert_eq!(error.to_string(), "Error on line 3: Division by zero.");

    let error = failure("int x;\nx = (1 + 2;");
    assert_eq!(error.to_string(), "Error on line 2: Unmatching parentheses.");
}

#[test]
fn negated_zero_double_prints_as_zero() {
    assert_output("double d; print(-d); print(0 - d); print(-0.0); print(-d * 1);",
                  "0.000000\n0.000000\n0.000000\n0.000000\n");
}

#[test]
fn deeply_nested_expressions_fail_without_crashing() {
    let source = format!("int a; a = {};", vec!["1"; 10_000].join(" + "));
    assert!(matches!(failure(&source),
                     Error::Parse(ParseError::NestingTooDeep { line: 1 })));
}

struct UnflushableOutput(Vec<u8>);

impl Write for UnflushableOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("device full"))
    }
}

#[test]
fn failed_output_flush_is_reported() {
    let mut out = UnflushableOutput(Vec::new());
    let result = run("print(1);", &mut out, &mut Vec::<u8>::new());

    assert_eq!(out.0, b"1\n");
    match result {
        Err(error @ Error::Io(_)) => {
            assert_eq!(error.to_string(), "Error while writing output: device full");
        },
        other => panic!("Expected an output error, got {other:?}"),
    }
}
