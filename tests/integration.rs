use sql_analyzer::{
    parse, tokenize, Condition, LiteralKind, ScanError, Statement, TokenCategory,
};

#[test]
fn full_pipeline_over_a_mixed_script() {
    let sql = "\
-- carga inicial
INSERT INTO usuarios (nombre, alta) VALUES ('Ana', '2023-01-15');
SELECT id, nombre FROM usuarios WHERE edad >= 18;
UPDATE usuarios SET activo = TRUE WHERE id = 1;
/* limpieza
   periódica */
DELETE FROM usuarios WHERE activo = FALSE;
";
    let tokens = tokenize(sql).unwrap();
    let result = parse(tokens);

    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.statements.len(), 4);
    assert!(matches!(result.statements[0], Statement::Insert { .. }));
    assert!(matches!(result.statements[1], Statement::Select { .. }));
    assert!(matches!(result.statements[2], Statement::Update { .. }));
    assert!(matches!(result.statements[3], Statement::Delete { .. }));
}

#[test]
fn round_trip_select_star() {
    let result = parse(tokenize("SELECT * FROM users;").unwrap());
    assert!(result.errors.is_empty());
    assert_eq!(
        result.statements,
        vec![Statement::Select {
            columns: vec!["*".to_string()],
            from: "users".to_string(),
            where_clause: None,
        }]
    );
}

#[test]
fn multi_error_batching() {
    // Missing SET: one error for the UPDATE, and recovery resumes at the
    // ';' so the following SELECT still parses.
    let result = parse(tokenize("UPDATE users id = 1; SELECT * FROM t;").unwrap());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.statements.len(), 1);
    assert!(matches!(result.statements[0], Statement::Select { .. }));
}

#[test]
fn comment_transparency() {
    let tokens = tokenize("-- note\nSELECT * FROM t;").unwrap();
    assert_eq!(tokens[0].category, TokenCategory::Comment);
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);

    let result = parse(tokens);
    assert!(result.errors.is_empty());
    assert_eq!(result.statements.len(), 1);
}

#[test]
fn fatal_lexical_failure_rejects_the_whole_input() {
    let outcome = tokenize("SELECT * FROM t WHERE name = 'abc;");
    assert_eq!(outcome, Err(ScanError::UnterminatedString(1)));
}

#[test]
fn condition_shape_is_one_triple() {
    let result = parse(tokenize("DELETE FROM t WHERE age > 18;").unwrap());
    assert!(result.errors.is_empty());
    let Statement::Delete { where_clause, .. } = &result.statements[0] else {
        panic!("expected a DELETE");
    };
    assert_eq!(
        where_clause.as_ref().unwrap(),
        &Condition {
            left: "age".to_string(),
            operator: ">".to_string(),
            right: "18".to_string(),
        }
    );
}

#[test]
fn pipeline_is_deterministic() {
    let sql = "INSERT INTO t VALUES ('2024-06-01'); SELECT nope FROM; DELETE FROM t;";
    let first = parse(tokenize(sql).unwrap());
    let second = parse(tokenize(sql).unwrap());
    assert_eq!(first, second);
}

#[test]
fn classification_is_context_free() {
    // The same lexeme gets the same category wherever it appears.
    let a = tokenize("WHERE").unwrap();
    let b = tokenize("SELECT x FROM t WHERE y = 1").unwrap();
    let from_b = b.iter().find(|t| t.lexeme == "WHERE").unwrap();
    assert_eq!(a[0].category, from_b.category);

    let dates = tokenize("'2023-01-15' '2023-01-15'").unwrap();
    assert_eq!(dates[0].category, TokenCategory::Literal(LiteralKind::Date));
    assert_eq!(dates[0].category, dates[1].category);
}

#[test]
fn error_rendering_convention() {
    let result = parse(tokenize("EXPLAIN;").unwrap());
    assert_eq!(
        result.errors[0].to_string(),
        "Error: Expected a valid SQL statement en \"EXPLAIN\" (línea 1, posición 1)"
    );
}
