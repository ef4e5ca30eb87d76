use mao::{
    ast::{ExprNode, ExprTree, SignOperator},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::MAX_NESTING_DEPTH,
        value::core::{Number, RuntimeObject, TypeTag},
    },
};
use pretty_assertions::assert_eq;

fn context_with(ints: &[&str], doubles: &[&str]) -> Context {
    let mut context = Context::new();
    for name in ints {
        context.register_variable(TypeTag::INT, name, 1).unwrap();
    }
    for name in doubles {
        context.register_variable(TypeTag::DOUBLE, name, 1).unwrap();
    }
    context
}

fn parse(context: &mut Context, source: &str) -> Result<ExprTree, ParseError> {
    let tokens = tokenize(source).tokens;
    let end = tokens.cursor_at(tokens.len() - 1);
    context.parse_expr(&tokens, tokens.cursor(), end)
}

fn eval(context: &mut Context, source: &str) -> Result<RuntimeObject, Error> {
    let tree = parse(context, source)?;
    let value = context.evaluate(&tree)?;
    context.release_transient_pool();
    Ok(value)
}

fn eval_fresh(source: &str) -> RuntimeObject {
    eval(&mut Context::new(), source).unwrap_or_else(|e| panic!("'{source}' failed: {e}"))
}

fn value_of(context: &Context, name: &str) -> Number {
    context.variable(name).unwrap().object.value()
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval_fresh("1 + 2 * 3"), RuntimeObject::int(7));
    assert_eq!(eval_fresh("2 * 3 + 4 * 5"), RuntimeObject::int(26));
    assert_eq!(eval_fresh("(1 + 2) * 3"), RuntimeObject::int(9));
    assert_eq!(eval_fresh("((4))"), RuntimeObject::int(4));
}

#[test]
fn arithmetic_is_left_associative() {
    assert_eq!(eval_fresh("10 - 4 - 3"), RuntimeObject::int(3));
    assert_eq!(eval_fresh("100 / 10 / 5"), RuntimeObject::int(2));
    assert_eq!(eval_fresh("2 - 3 + 4"), RuntimeObject::int(3));
    assert_eq!(eval_fresh("8 / 2 * 4"), RuntimeObject::int(16));
}

#[test]
fn assignment_is_right_associative() {
    let mut context = context_with(&["a", "b", "c"], &[]);
    let result = eval(&mut context, "a = b = c = 4").unwrap();

    assert_eq!(result, RuntimeObject::int(4));
    for name in ["a", "b", "c"] {
        assert_eq!(value_of(&context, name), Number::Int(4));
    }
}

#[test]
fn leading_sign_on_single_operand_builds_sign_node() {
    let mut context = context_with(&["x"], &[]);
    let tree = parse(&mut context, "-x").unwrap();

    assert!(matches!(tree.node(tree.root()),
                     Some(ExprNode::Sign { op: SignOperator::Minus,
                                           .. })));
    assert_eq!(context.evaluate(&tree).unwrap(), RuntimeObject::int(0));
    assert_eq!(eval_fresh("-5"), RuntimeObject::int(-5));
    assert_eq!(eval_fresh("+7"), RuntimeObject::int(7));
    assert_eq!(eval_fresh("-2.5"), RuntimeObject::double(-2.5));
}

#[test]
fn leading_sign_before_longer_expression_subtracts_from_zero() {
    assert_eq!(eval_fresh("-(2 + 3)"), RuntimeObject::int(-5));
    assert_eq!(eval_fresh("-2 * 3 + 1"), RuntimeObject::int(-5));
    assert_eq!(eval_fresh("- -3"), RuntimeObject::int(3));
    assert_eq!(eval_fresh("2 * -3"), RuntimeObject::int(-6));
    assert_eq!(eval_fresh("4 - -1"), RuntimeObject::int(5));
}

#[test]
fn sign_subtracts_from_an_integer_zero() {
    let mut context = context_with(&[], &["d"]);
    for source in ["-d", "0 - d", "-d * 1", "+d", "-0.0"] {
        let value = eval(&mut context, source).unwrap();
        assert_eq!(value.tag(), TypeTag::DOUBLE, "{source}");
        assert_eq!(value.to_string(), "0.000000", "{source}");
    }

    let error = eval(&mut Context::new(), "-(-9223372036854775807 - 1)").unwrap_err();
    assert!(matches!(error, Error::Runtime(RuntimeError::Overflow { .. })), "{error}");
}

#[test]
fn negation_does_not_modify_the_variable() {
    let mut context = context_with(&["x"], &[]);
    eval(&mut context, "x = 3").unwrap();
    assert_eq!(eval(&mut context, "-x").unwrap(), RuntimeObject::int(-3));
    assert_eq!(value_of(&context, "x"), Number::Int(3));
}

#[test]
fn mixed_operands_widen_to_double() {
    assert_eq!(eval_fresh("7 / 2"), RuntimeObject::int(3));
    assert_eq!(eval_fresh("7 / 2.0"), RuntimeObject::double(3.5));
    assert_eq!(eval_fresh("1 + 0.5").tag(), TypeTag::DOUBLE);
    assert_eq!(eval_fresh("2 * 3").tag(), TypeTag::INT);
}

#[test]
fn stores_convert_to_the_declared_type() {
    let mut context = context_with(&["i"], &["d"]);

    eval(&mut context, "i = 7.9").unwrap();
    assert_eq!(value_of(&context, "i"), Number::Int(7));

    eval(&mut context, "i = -7.9").unwrap();
    assert_eq!(value_of(&context, "i"), Number::Int(-7));

    eval(&mut context, "d = 7 / 2").unwrap();
    assert_eq!(value_of(&context, "d"), Number::Double(3.0));

    eval(&mut context, "d = i").unwrap();
    assert_eq!(value_of(&context, "d"), Number::Double(-7.0));
}

#[test]
fn compound_assignment_combines_then_stores() {
    let mut context = context_with(&["a"], &[]);
    eval(&mut context, "a = 5").unwrap();

    eval(&mut context, "a *= 3").unwrap();
    assert_eq!(value_of(&context, "a"), Number::Int(15));
    eval(&mut context, "a -= 20").unwrap();
    assert_eq!(value_of(&context, "a"), Number::Int(-5));
    eval(&mut context, "a /= 2").unwrap();
    assert_eq!(value_of(&context, "a"), Number::Int(-2));
    eval(&mut context, "a += 0.9").unwrap();
    assert_eq!(value_of(&context, "a"), Number::Int(-1));
}

#[test]
fn assignment_inside_parentheses_yields_the_variable() {
    let mut context = context_with(&["b", "c"], &[]);
    let result = eval(&mut context, "b = (c = 5) + 1").unwrap();

    assert_eq!(result, RuntimeObject::int(6));
    assert_eq!(value_of(&context, "c"), Number::Int(5));
}

#[test]
fn operands_are_read_after_both_sides_are_evaluated() {
    let mut context = context_with(&["a"], &[]);
    eval(&mut context, "a = 1").unwrap();
    assert_eq!(eval(&mut context, "a + (a = 5)").unwrap(), RuntimeObject::int(10));
}

#[test]
fn division_by_zero_is_reported() {
    let mut context = context_with(&["a"], &[]);
    eval(&mut context, "a = 9").unwrap();

    for source in ["1 / 0", "1.0 / 0.0", "a / (2 - 2)", "a /= 0"] {
        let error = eval(&mut context, source).unwrap_err();
        assert!(matches!(error, Error::Runtime(RuntimeError::DivisionByZero { line: 1 })),
                "{source}: {error}");
    }
    assert_eq!(value_of(&context, "a"), Number::Int(9));
}

#[test]
fn integer_overflow_is_reported() {
    let mut context = context_with(&["i"], &[]);
    for source in ["9223372036854775807 + 1", "-9223372036854775807 - 2", "i = 1e300"] {
        let error = eval(&mut context, source).unwrap_err();
        assert!(matches!(error, Error::Runtime(RuntimeError::Overflow { .. })),
                "{source}: {error}");
    }
}

#[test]
fn malformed_expressions_are_rejected() {
    let mut context = context_with(&["a"], &[]);
    let cases: [(&str, fn(&ParseError) -> bool); 10] =
        [("(1 + 2", |e| matches!(e, ParseError::UnmatchedParentheses { .. })),
         ("1 + 2)", |e| matches!(e, ParseError::UnmatchedParentheses { .. })),
         ("1 2", |e| matches!(e, ParseError::MissingOperator { .. })),
         ("a a", |e| matches!(e, ParseError::MissingOperator { .. })),
         ("* 3", |e| matches!(e, ParseError::OperatorAtStart { .. })),
         ("* 3 + 2", |e| matches!(e, ParseError::OperatorAtStart { .. })),
         ("1 +", |e| matches!(e, ParseError::MissingOperand { .. })),
         ("()", |e| matches!(e, ParseError::MissingOperand { .. })),
         ("() + ()", |e| matches!(e, ParseError::TooManyOperators { .. })),
         ("3 = 4", |e| matches!(e, ParseError::InvalidAssignmentTarget { .. }))];

    for (source, expected) in cases {
        let error = parse(&mut context, source).unwrap_err();
        assert!(expected(&error), "{source}: {error}");
    }
}

#[test]
fn undeclared_variables_fail_to_parse() {
    let error = parse(&mut Context::new(), "x + 1").unwrap_err();
    assert_eq!(error,
               ParseError::UndefinedVariable { name: "x".to_string(),
                                               line: 1, });
}

#[test]
fn literals_live_in_the_transient_pool() {
    let mut context = context_with(&["a"], &[]);

    let tree = parse(&mut context, "a").unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(context.transient_count(), 0);

    let tree = parse(&mut context, "1 + 2").unwrap();
    assert_eq!(context.transient_count(), 2);
    assert_eq!(context.evaluate(&tree).unwrap(), RuntimeObject::int(3));
    assert_eq!(context.transient_count(), 3);

    context.release_transient_pool();
    assert_eq!(context.transient_count(), 0);
    assert!(matches!(context.evaluate(&tree),
                     Err(RuntimeError::ReleasedObject { .. })));
}

#[test]
fn redeclaration_keeps_the_original_variable() {
    let mut context = context_with(&["a"], &[]);
    eval(&mut context, "a = 12").unwrap();

    assert!(context.register_variable(TypeTag::DOUBLE, "a", 4).is_err());
    let record = context.variable("a").unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(record.object.tag(), TypeTag::INT);
    assert_eq!(record.object.value(), Number::Int(12));
    assert_eq!(context.variable_count(), 1);
}

#[test]
fn pool_is_empty_after_every_statement() {
    let mut context = Context::new();
    let tokens = tokenize("int a; a = 1 + 2 * 3; a = -a;").tokens;
    let mut out = Vec::new();

    context.execute(&tokens, &mut out).unwrap();
    assert_eq!(context.transient_count(), 0);
    assert_eq!(value_of(&context, "a"), Number::Int(-7));

    let tokens = tokenize("a = a / 0;").tokens;
    assert!(context.execute(&tokens, &mut out).is_err());
    assert_eq!(context.transient_count(), 0);
}

#[test]
fn nesting_depth_is_bounded() {
    let mut context = context_with(&["a"], &[]);

    let chain = vec!["1"; 300].join(" + ");
    assert_eq!(eval(&mut context, &chain).unwrap(), RuntimeObject::int(300));

    let chain = vec!["1"; MAX_NESTING_DEPTH + 2].join(" + ");
    assert!(matches!(parse(&mut context, &chain),
                     Err(ParseError::NestingTooDeep { line: 1 })));

    let long_chain = format!("a = {}", vec!["1"; 10_000].join(" + "));
    assert!(matches!(parse(&mut context, &long_chain),
                     Err(ParseError::NestingTooDeep { .. })));

    let depth = MAX_NESTING_DEPTH + 1;
    let parenthesised = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(parse(&mut context, &parenthesised),
                     Err(ParseError::NestingTooDeep { .. })));
    assert_eq!(context.variable("a").unwrap().object, RuntimeObject::int(0));
}
