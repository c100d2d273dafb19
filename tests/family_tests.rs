//! End-to-end scenario over a nested object graph.
//!
//! Mirrors the walkthrough: lookups on a family graph each return a
//! container, and the test shows why `flat_map` exists by contrasting it
//! with plain `fmap` on the same chain.

use presence::always_truthy;
use presence::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parent;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Child {
    name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GrandChild;

always_truthy!(Parent, Child, GrandChild);

impl Parent {
    fn child(&self) -> Maybe<Child> {
        Maybe::lift(Child {
            name: "David".to_string(),
        })
    }
}

impl Child {
    fn son(&self) -> Maybe<GrandChild> {
        Maybe::lift(GrandChild)
    }

    fn daughter(&self) -> Maybe<GrandChild> {
        Maybe::Absent
    }
}

impl std::fmt::Display for Child {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Child({})", self.name)
    }
}

#[rstest]
fn fmap_over_container_producing_lookup_nests() {
    let dad: Maybe<Parent> = Maybe::lift(Parent);
    let nested: Maybe<Maybe<Child>> = dad.fmap(|parent| parent.child());
    assert_eq!(
        nested,
        Maybe::Present(Maybe::Present(Child {
            name: "David".to_string()
        }))
    );
    assert_eq!(nested.describe(), "Present(Present(Child(David)))");
}

#[rstest]
fn fmap_with_absent_head_short_circuits_before_nesting() {
    let mom: Maybe<Parent> = Maybe::Absent;
    let nested: Maybe<Maybe<Child>> = mom.fmap(|parent| parent.child());
    assert_eq!(nested, Maybe::Absent);
}

#[rstest]
fn fmap_of_absent_lookup_yields_present_absent() {
    let dad: Maybe<Parent> = Maybe::lift(Parent);
    let nested: Maybe<Maybe<GrandChild>> =
        dad.fmap(|parent| parent.child().flat_map(|child| child.daughter()));
    assert_eq!(nested, Maybe::Present(Maybe::Absent));
}

#[rstest]
fn flat_map_unnests_one_lookup() {
    let dad: Maybe<Parent> = Maybe::lift(Parent);
    let child: Maybe<Child> = dad.flat_map(|parent| parent.child());
    assert_eq!(
        child,
        Maybe::Present(Child {
            name: "David".to_string()
        })
    );
}

#[rstest]
fn chained_flat_map_flattens_two_levels_into_one() {
    let dad: Maybe<Parent> = Maybe::lift(Parent);

    let granddaughter: Maybe<GrandChild> = dad
        .flat_map(|parent| parent.child())
        .flat_map(|child| child.daughter());
    assert_eq!(granddaughter, Maybe::Absent);

    let grandson: Maybe<GrandChild> = dad
        .flat_map(|parent| parent.child())
        .flat_map(|child| child.son());
    assert_eq!(grandson, Maybe::Present(GrandChild));
}

#[rstest]
fn flatten_recovers_flat_map_from_fmap() {
    let dad: Maybe<Parent> = Maybe::lift(Parent);
    let nested: Maybe<Maybe<Child>> = dad.fmap(|parent| parent.child());
    let flat: Maybe<Child> = dad.flat_map(|parent| parent.child());
    assert_eq!(nested.flatten(), flat);
}

#[rstest]
fn absent_head_short_circuits_whole_chain() {
    let mut lookups = 0;
    let mom: Maybe<Parent> = Maybe::Absent;
    let grandson: Maybe<GrandChild> = mom
        .flat_map(|parent| {
            lookups += 1;
            parent.child()
        })
        .flat_map(|child| child.son());
    assert_eq!(grandson, Maybe::Absent);
    assert_eq!(lookups, 0);
}

#[rstest]
fn applicative_double_application() {
    let doubler: Maybe<fn(String) -> String> = Maybe::lift(|word| format!("{word}{word}"));
    let result = doubler.apply(doubler.apply(Maybe::lift("yoooo".to_string())));
    assert_eq!(result, Maybe::Present("yoooo".repeat(4)));
}
