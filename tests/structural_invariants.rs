//! Invariant tests for tree nesting rules and cacheability analysis
//!
//! The engine must reject malformed trees with a structural error rather
//! than silently emitting wrong clauses, no matter what an upstream parser
//! produced.

use querybridge::node::{BoolOperator, Field, Node, Range, Subquery, Word, WordRange};
use querybridge::{NullTarget, ParsedQuery, TranslateError, Translator};

fn translate_nodes(translator: &Translator, nodes: Vec<Node>) -> Result<(), TranslateError> {
    translator.translate(&ParsedQuery::new(nodes), &mut NullTarget)
}

#[test]
fn test_range_outside_field_is_rejected() {
    let err = translate_nodes(
        &Translator::new(),
        vec![Node::Range(Range::new().gte(1i64).lte(5i64))],
    )
    .unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_word_range_outside_field_is_rejected() {
    let err = translate_nodes(
        &Translator::new(),
        vec![Node::WordRange(WordRange::new("a", "b"))],
    )
    .unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_range_inside_subquery_is_rejected() {
    // Even with a field in scope, a range must be the field's immediate
    // content: tags:(a [1..5]) is malformed.
    let err = translate_nodes(
        &Translator::new(),
        vec![Node::Field(Field::new(
            "rating",
            Node::Subquery(Subquery::new(vec![
                Node::Word(Word::new("a")),
                Node::Range(Range::new().gte(1i64)),
            ])),
        ))],
    )
    .unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_field_inside_field_is_rejected() {
    let err = translate_nodes(
        &Translator::new(),
        vec![Node::Field(Field::new(
            "outer",
            Node::Field(Field::new("inner", Node::Word(Word::new("x")))),
        ))],
    )
    .unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_field_inside_subquery_inside_field_is_rejected() {
    let err = translate_nodes(
        &Translator::new(),
        vec![Node::Field(Field::new(
            "outer",
            Node::Subquery(Subquery::new(vec![Node::Field(Field::new(
                "inner",
                Node::Word(Word::new("x")),
            ))])),
        ))],
    )
    .unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_field_inside_bare_subquery_is_allowed() {
    // (status:active rust) is fine; only field-in-field nesting is illegal
    let ok = translate_nodes(
        &Translator::new(),
        vec![Node::Subquery(Subquery::new(vec![
            Node::Field(Field::new("status", Node::Word(Word::new("active")))),
            Node::Word(Word::new("rust")),
        ]))],
    );
    assert!(ok.is_ok());
}

#[test]
fn test_subquery_inside_subquery_is_rejected() {
    let err = translate_nodes(
        &Translator::new(),
        vec![Node::Subquery(Subquery::new(vec![Node::Subquery(
            Subquery::new(vec![Node::Word(Word::new("x"))]),
        )]))],
    )
    .unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_error_propagates_immediately() {
    // Nodes before the violation are dispatched; the violating node aborts
    // the translation with no attempt to continue past it.
    let err = translate_nodes(
        &Translator::new(),
        vec![
            Node::Word(Word::new("rust")),
            Node::Range(Range::new().gte(1i64)),
            Node::Word(Word::new("never-reached")),
        ],
    )
    .unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_depth_limit_is_enforced() {
    let translator = Translator::new().with_max_depth(3);

    // field -> subquery -> word: three levels, allowed
    let ok = translate_nodes(
        &translator,
        vec![Node::Field(Field::new(
            "tags",
            Node::Subquery(Subquery::new(vec![Node::Word(Word::new("rust"))])),
        ))],
    );
    assert!(ok.is_ok());

    // Synthesized fields count toward the depth too: the implicit field
    // around the hashtag pushes the token to level two.
    let translator = Translator::new().with_max_depth(1).with_hashtag_field("tags");
    let err = translate_nodes(
        &translator,
        vec![Node::Hashtag(querybridge::node::Hashtag::new("rustlang"))],
    )
    .unwrap_err();
    assert!(matches!(err, TranslateError::DepthExceeded { limit: 1 }));
}

#[test]
fn test_cacheability_requires_exact_mandatory_unboosted() {
    let translator = Translator::new();

    let cacheable = Field::new("status", Node::Word(Word::new("active")))
        .with_operator(BoolOperator::Required);
    assert!(translator.query_on_field_is_cacheable(&cacheable));

    let optional = Field::new("status", Node::Word(Word::new("active")));
    assert!(!translator.query_on_field_is_cacheable(&optional));

    let boosted = Field::new("status", Node::Word(Word::new("active")))
        .with_operator(BoolOperator::Required)
        .with_boost(3.0);
    assert!(!translator.query_on_field_is_cacheable(&boosted));

    let full_text = Field::new("title", Node::Word(Word::new("active")))
        .with_operator(BoolOperator::Required);
    assert!(!translator.query_on_field_is_cacheable(&full_text));
}

#[test]
fn test_registry_changes_flip_cacheability() {
    let mut translator = Translator::new();
    let field = Field::new("category", Node::Word(Word::new("news")))
        .with_operator(BoolOperator::Required);

    assert!(translator.query_on_field_is_cacheable(&field));

    translator.full_text_fields_mut().add("category");
    assert!(!translator.query_on_field_is_cacheable(&field));

    translator.full_text_fields_mut().remove("category");
    assert!(translator.query_on_field_is_cacheable(&field));
}

#[test]
fn test_translator_survives_rejected_queries() {
    let translator = Translator::new();

    for _ in 0..3 {
        let err = translate_nodes(&translator, vec![Node::Range(Range::new().gte(1i64))]);
        assert!(err.is_err());

        let ok = translate_nodes(&translator, vec![Node::Word(Word::new("rust"))]);
        assert!(ok.is_ok());
    }
}
