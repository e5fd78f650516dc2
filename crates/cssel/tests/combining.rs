//! Integration tests for combining selectors.
//!
//! Combinators: descendant (`' '`), child (`>`), adjacent sibling (`+`),
//! general sibling (`~`). Rendering is `left + ' ' + token + ' ' + right`.

use cssel::{BuilderConfig, Combinator, Selector, SelectorBuilder, SelectorError};

// ============================================================================
// SINGLE COMBINATIONS
// ============================================================================

#[test]
fn test_child() {
    let builder = SelectorBuilder::new();
    let selector = builder
        .combine(builder.element("ul"), ">", builder.element("li"))
        .unwrap();
    assert_eq!(selector.stringify(), "ul > li");
}

#[test]
fn test_adjacent_sibling() {
    let builder = SelectorBuilder::new();
    let selector = builder
        .combine(builder.element("h1"), "+", builder.element("p"))
        .unwrap();
    assert_eq!(selector.stringify(), "h1 + p");
}

#[test]
fn test_general_sibling() {
    let builder = SelectorBuilder::new();
    let selector = builder
        .combine(builder.id("a"), "~", builder.class("b"))
        .unwrap();
    assert_eq!(selector.stringify(), "#a ~ .b");
}

#[test]
fn test_descendant_is_triple_spaced() {
    let builder = SelectorBuilder::new();
    let selector = builder
        .combine(builder.element("nav"), " ", builder.element("a"))
        .unwrap();
    assert_eq!(selector.stringify(), "nav   a");
}

// ============================================================================
// NESTING
// ============================================================================

#[test]
fn test_nested_combination() {
    let builder = SelectorBuilder::new();
    let selector = builder
        .combine(
            builder
                .element("div")
                .id("main")
                .and_then(|f| f.class("container"))
                .and_then(|f| f.class("draggable"))
                .unwrap(),
            "+",
            builder
                .combine(
                    builder.element("table").id("data").unwrap(),
                    "~",
                    builder
                        .combine(
                            builder.element("tr").pseudo_class("nth-of-type(even)").unwrap(),
                            " ",
                            builder.element("td").pseudo_class("nth-of-type(even)").unwrap(),
                        )
                        .unwrap(),
                )
                .unwrap(),
        )
        .unwrap();

    assert_eq!(
        selector.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
    assert_eq!(selector.fragment_count(), 4);
}

#[test]
fn test_nested_structure() {
    let builder = SelectorBuilder::new();
    let inner = builder
        .combine(builder.element("a"), ">", builder.element("b"))
        .unwrap();
    let outer = builder.combine(inner, "+", builder.element("c")).unwrap();

    let Selector::Combined(combined) = &outer else {
        panic!("expected a combined selector");
    };
    assert_eq!(combined.combinator, Combinator::AdjacentSibling);
    assert!(matches!(*combined.left, Selector::Combined(_)));
    assert!(matches!(*combined.right, Selector::Fragment(_)));
    assert_eq!(outer.stringify(), "a > b + c");
}

#[test]
fn test_stringify_combined_twice() {
    let builder = SelectorBuilder::new();
    let selector = builder
        .combine(builder.element("a"), ">", builder.element("b"))
        .unwrap();
    assert_eq!(selector.stringify(), selector.stringify());
}

// ============================================================================
// OWNERSHIP
// ============================================================================

#[test]
fn test_combine_freezes_operands() {
    let builder = SelectorBuilder::new();
    let left = builder.element("a");
    let selector = builder
        .combine(left.clone(), ">", builder.element("b"))
        .unwrap();
    let _extended = left.class("late").unwrap();
    assert_eq!(selector.stringify(), "a > b");
}

// ============================================================================
// TOKEN POLICY
// ============================================================================

#[test]
fn test_unknown_token_passes_through() {
    let builder = SelectorBuilder::new();
    let selector = builder
        .combine(builder.element("col"), "||", builder.element("td"))
        .unwrap();
    assert_eq!(selector.stringify(), "col || td");
}

#[test]
fn test_strict_rejects_unknown_token() {
    let builder = SelectorBuilder::with_config(BuilderConfig::strict());
    let err = builder
        .combine(builder.element("col"), "||", builder.element("td"))
        .unwrap_err();
    assert_eq!(err, SelectorError::UnsupportedCombinator("||".to_string()));
}

#[test]
fn test_padded_tokens_render_literally() {
    let builder = SelectorBuilder::new();
    let render = |token: &str| {
        builder
            .combine(builder.element("a"), token, builder.element("b"))
            .unwrap()
            .stringify()
    };
    assert_eq!(render(" > "), "a  >  b");
    assert_eq!(render("  "), "a    b");
    assert_eq!(render("\t~"), "a \t~ b");
}

#[test]
fn test_strict_rejects_padded_token() {
    let builder = SelectorBuilder::with_config(BuilderConfig::strict());
    let err = builder
        .combine(builder.element("a"), " > ", builder.element("b"))
        .unwrap_err();
    assert_eq!(err, SelectorError::UnsupportedCombinator(" > ".to_string()));
}
