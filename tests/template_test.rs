//! Behavioural tests for term and quad templates through the public API.
//!
//! Covers the algebraic properties of the combinators, the mode/value
//! coupling of leaf templates and the default-graph shortcut of quad templates.

use std::sync::Arc;
use term_templates::{
    AnyOf, BlankNode, GraphName, Literal, LiteralMatcher, MatchMode, NamedNode, NamedNodeMatcher,
    Not, NumericMatcher, Quad, QuadMatch, QuadMatcher, Slot, SlotSpec, TemplateError, Term,
    TermMatch, ValueMatcher,
};

const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";

fn iri(local: &str) -> NamedNode {
    NamedNode::new(&format!("http://example.org/{}", local)).unwrap()
}

/// A mix of every term kind
fn sample_terms() -> Vec<Term> {
    vec![
        iri("alice").into(),
        BlankNode::with_id("b1").unwrap().into(),
        Literal::new_simple_literal("2").into(),
        Literal::new_simple_literal("1foo").into(),
        Literal::new_language_tagged_literal("Lorem ipsum", "lat").unwrap().into(),
        Literal::new_typed_literal("3", NamedNode::new(XSD_INT).unwrap()).into(),
        Term::DefaultGraph,
    ]
}

fn sample_templates() -> Vec<Arc<dyn TermMatch>> {
    vec![
        Arc::new(ValueMatcher::new(["2"], MatchMode::Equals).unwrap()),
        Arc::new(ValueMatcher::new(["ipsum", "alice"], MatchMode::Contains).unwrap()),
        Arc::new(ValueMatcher::new(["/^[0-9]+$/"], MatchMode::Regex).unwrap()),
        Arc::new(NamedNodeMatcher::any()),
        Arc::new(LiteralMatcher::any().with_lang("")),
        Arc::new(NumericMatcher::new(Some(2.0), MatchMode::GreaterEqual, false).unwrap()),
        Arc::new(NumericMatcher::any(true)),
    ]
}

#[test]
fn test_any_mode_matches_everything() {
    let any_value = ValueMatcher::new(["ignored"], MatchMode::Any).unwrap();
    assert!(sample_terms().iter().all(|t| any_value.matches_term(t)));

    let any_literal = LiteralMatcher::new(["ignored"], MatchMode::Any).unwrap();
    assert!(sample_terms()
        .iter()
        .filter(|t| t.is_literal())
        .all(|t| any_literal.matches_term(t)));

    let any_named = NamedNodeMatcher::new(["ignored"], MatchMode::Any).unwrap();
    assert!(sample_terms()
        .iter()
        .filter(|t| t.is_named_node())
        .all(|t| any_named.matches_term(t)));
}

#[test]
fn test_not_is_complement() {
    for template in sample_templates() {
        let negated = Not(Arc::clone(&template));
        let twice = Not(Not(Arc::clone(&template)));
        for term in sample_terms() {
            assert_eq!(negated.matches_term(&term), !template.matches_term(&term), "{} on {}", template, term);
            assert_eq!(twice.matches_term(&term), template.matches_term(&term));
        }
    }
}

#[test]
fn test_any_of_is_disjunction() {
    let templates = sample_templates();
    let empty = AnyOf::<Arc<dyn TermMatch>>::new([]);
    for term in sample_terms() {
        assert!(!empty.matches_term(&term));
    }

    for m1 in &templates {
        let single = AnyOf::new([Arc::clone(m1)]);
        for m2 in &templates {
            let pair = AnyOf::new([Arc::clone(m1), Arc::clone(m2)]);
            for term in sample_terms() {
                assert_eq!(single.matches_term(&term), m1.matches_term(&term));
                assert_eq!(
                    pair.matches_term(&term),
                    m1.matches_term(&term) || m2.matches_term(&term)
                );
            }
        }
    }
}

#[test]
fn test_not_equals_example() {
    let tmpl = ValueMatcher::new(["foo bar"], MatchMode::NotEquals).unwrap();
    assert!(!tmpl.matches_term(&Literal::new_simple_literal("foo bar").into()));
    assert!(tmpl.matches_term(&Literal::new_simple_literal("Lorem ipsum").into()));
}

#[test]
fn test_numeric_example() {
    let tmpl = NumericMatcher::new(Some(2.0), MatchMode::GreaterEqual, false).unwrap();
    assert!(tmpl.matches_term(&Literal::new_simple_literal("3").into()));
    assert!(!tmpl.matches_term(&Literal::new_simple_literal("1foo").into()));
}

#[test]
fn test_strict_numeric_requires_numeric_datatype() {
    let lenient = NumericMatcher::new(Some(2.0), MatchMode::Equals, false).unwrap();
    let strict = NumericMatcher::new(Some(2.0), MatchMode::Equals, true).unwrap();

    let untyped: Term = Literal::new_simple_literal("2").into();
    let wrong_type: Term = Literal::new_typed_literal(
        "2",
        NamedNode::new("http://www.w3.org/2001/XMLSchema#token").unwrap(),
    )
    .into();
    let typed: Term = Literal::new_typed_literal("2", NamedNode::new(XSD_INT).unwrap()).into();

    assert!(lenient.matches_term(&untyped));
    assert!(lenient.matches_term(&wrong_type));
    assert!(!strict.matches_term(&untyped));
    assert!(!strict.matches_term(&wrong_type));
    assert!(strict.matches_term(&typed));
}

#[test]
fn test_any_language() {
    let tmpl = LiteralMatcher::any().with_lang("");
    assert!(tmpl.matches_term(&Literal::new_language_tagged_literal("a", "en").unwrap().into()));
    assert!(tmpl.matches_term(&Literal::new_language_tagged_literal("a", "de").unwrap().into()));
    assert!(!tmpl.matches_term(&Literal::new_simple_literal("a").into()));
    assert!(!tmpl.matches_term(&iri("a").into()));
}

#[test]
fn test_invalid_mode_fails_construction() {
    assert!(matches!(
        ValueMatcher::with_mode_tag(["foo"], "bar"),
        Err(TemplateError::InvalidMatchMode(_))
    ));
    assert!(matches!(
        NumericMatcher::new(Some(4.0), MatchMode::Regex, false),
        Err(TemplateError::InvalidMatchMode(_))
    ));
}

#[test]
fn test_type_mismatch_is_false() {
    let literal_only = LiteralMatcher::equals("http://example.org/alice");
    assert!(!literal_only.matches_term(&iri("alice").into()));

    let numeric = NumericMatcher::any(false);
    assert!(!numeric.matches_term(&Term::DefaultGraph));
    assert!(!numeric.matches_term(&BlankNode::new().into()));
}

#[test]
fn test_quad_wildcards() {
    let quads = vec![
        Quad::in_default_graph(iri("x"), iri("p"), iri("y")),
        Quad::new(BlankNode::new(), iri("q"), Literal::new_simple_literal("v"), iri("g")),
    ];
    let all = QuadMatcher::any();
    let none = all.with_negate(true);
    for quad in &quads {
        assert!(all.matches_quad(quad));
        assert!(!none.matches_quad(quad));
    }
}

#[test]
fn test_quad_predicate_value() {
    let tmpl = QuadMatcher::new(SlotSpec::Wildcard, "http://example.org/p", SlotSpec::Wildcard, SlotSpec::Wildcard);
    assert!(tmpl.matches_quad(&Quad::in_default_graph(iri("x"), iri("p"), iri("y"))));
    assert!(!tmpl.matches_quad(&Quad::in_default_graph(iri("x"), iri("q"), iri("y"))));
}

#[test]
fn test_with_predicate_leaves_other_slots() {
    let predicate: Arc<dyn TermMatch> = Arc::new(NamedNodeMatcher::new(["foaf"], MatchMode::Contains).unwrap());
    let base = QuadMatcher::any().with_subject(iri("s")).with_graph(iri("g"));
    let derived = base.with_predicate(Arc::clone(&predicate));

    assert_eq!(derived.predicate(), Some(&Slot::Matcher(predicate)));
    assert_eq!(derived.subject(), base.subject());
    assert_eq!(derived.object(), base.object());
    assert_eq!(derived.graph(), base.graph());
    assert_eq!(derived.is_negated(), base.is_negated());
    assert!(base.predicate().is_none());
}

#[test]
fn test_default_graph_slot_matches_any_graph() {
    let tmpl = QuadMatcher::any().with_graph(GraphName::DefaultGraph);
    let in_default = Quad::in_default_graph(iri("x"), iri("p"), iri("y"));
    let in_named = Quad::new(iri("x"), iri("p"), iri("y"), iri("g"));
    let in_blank = Quad::new(iri("x"), iri("p"), iri("y"), BlankNode::new());

    assert!(tmpl.matches_quad(&in_default));
    assert!(tmpl.matches_quad(&in_named));
    assert!(tmpl.matches_quad(&in_blank));
    assert!(!tmpl.with_negate(true).matches_quad(&in_named));
}

#[test]
fn test_rendering_is_deterministic() {
    let build = || {
        QuadMatcher::any()
            .with_predicate(iri("p"))
            .with_object(AnyOf::terms().or(NumericMatcher::equals(2.0)).or(NamedNodeMatcher::any()))
    };
    assert_eq!(build().to_string(), build().to_string());
    assert_eq!(
        build().to_string(),
        "[ <http://example.org/p> [any {[n == 2], [nn any ]}]]"
    );
    assert_eq!(Not(build()).to_string(), format!("[not {}]", build()));
}
