//! Console walkthrough of the optional-value container.
//!
//! Narrates, on a deliberately contrived family object graph, why the
//! three type classes exist: `fmap` transforms inside the container,
//! nesting when the function itself returns a container; `flat_map`
//! un-nests; `apply` threads a contained function through a contained
//! argument.

use presence::always_truthy;
use presence::prelude::*;

/// Root of the demonstration object graph.
#[derive(Clone, Copy)]
struct Parent;

/// Intermediate node; lookups on it may come back empty.
struct Child {
    name: String,
}

/// Leaf of the graph.
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

impl std::fmt::Display for GrandChild {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "I exist")
    }
}

fn main() {
    println!("Simple monad container.");
    let number: Maybe<i32> = Maybe::lift(1);
    println!("\t{}", number.describe());
    let greeting: Maybe<String> = number.fmap(|_| "hi".to_string());
    println!("\t{}", greeting.describe());
    println!();

    let dad: Maybe<Parent> = Maybe::lift(Parent);

    // fmap alone nests: the lookup returns a container, so the result
    // is a container in a container.
    println!("Nested containers with just fmap");
    let nested: Maybe<Maybe<Child>> = dad.fmap(|parent| parent.child());
    println!("\t{}", nested.describe());
    println!();

    println!("Nested container with head of sequence being absent.");
    let mom: Maybe<Parent> = Maybe::Absent;
    let moms_stepson: Maybe<Maybe<Child>> = mom.fmap(|parent| parent.child());
    println!("\t{}", moms_stepson.describe());
    println!();

    println!("Un-nest with flat_map");
    let child: Maybe<Child> = dad.flat_map(|parent| parent.child());
    println!("\t{}", child.describe());
    println!();

    println!("Chained un-nesting");
    let granddaughter: Maybe<GrandChild> = dad
        .flat_map(|parent| parent.child())
        .flat_map(|child| child.daughter());
    println!("\t{}", granddaughter.describe());
    let grandson: Maybe<GrandChild> = dad
        .flat_map(|parent| parent.child())
        .flat_map(|child| child.son());
    println!("\t{}", grandson.describe());
    println!();

    println!("Applicatives");
    let doubler: Maybe<fn(String) -> String> = Maybe::lift(|word| format!("{word}{word}"));
    let two_applications = doubler.apply(doubler.apply(Maybe::lift("yoooo".to_string())));
    println!("\t{}", two_applications.describe());
}
