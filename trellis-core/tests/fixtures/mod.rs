//! Example graphs shared by the integration tests.

#![allow(dead_code)]

use serde::Serialize;
use trellis_core::{Graph, Node};

/// Values flowing through the example graphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    List(Vec<f64>),
}

impl Value {
    pub fn number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::List(_) => f64::NAN,
        }
    }

    pub fn list(&self) -> &[f64] {
        match self {
            Value::List(items) => items,
            Value::Number(_) => &[],
        }
    }
}

/// Mean, mean of products and variance-like result over a small list.
///
/// `v` evaluates to `2.0`.
pub fn statistics_graph() -> Graph<&'static str, Value> {
    Graph::new()
        .with("n", Node::map("xs", |xs: &Value| Value::Number(xs.list().len() as f64)))
        .with(
            "m",
            Node::zip("xs", "n", |xs: &Value, n: &Value| {
                Value::Number(xs.list().iter().sum::<f64>() / n.number())
            }),
        )
        .with(
            "m2",
            Node::zip("xs", "n", |xs: &Value, n: &Value| {
                Value::Number(xs.list().iter().product::<f64>() / n.number())
            }),
        )
        .with(
            "v",
            Node::zip("m", "m2", |m: &Value, m2: &Value| {
                Value::Number(m.number() * m.number() - m2.number())
            }),
        )
        .with("xs", Node::constant(Value::List(vec![1.0, 2.0, 3.0])))
}

/// `n` needs an undeclared vertex and `x -> z -> y -> x` loops.
pub fn broken_graph() -> Graph<&'static str, Value> {
    Graph::new()
        .with("n", Node::map("a", Value::clone))
        .with("b", Node::map("n", Value::clone))
        .with("z", Node::map("y", Value::clone))
        .with("x", Node::map("z", Value::clone))
        .with("y", Node::map("x", Value::clone))
}

/// `{ n: () -> 3, m: (n) -> n, v: (m) -> m*m }`
pub fn square_graph() -> Graph<&'static str, i64> {
    Graph::new()
        .with("n", Node::constant(3))
        .with("m", Node::map("n", |n| *n))
        .with("v", Node::map("m", |m| m * m))
}

/// A diamond with a shared base and a tail hanging off the top.
pub fn diamond_graph() -> Graph<&'static str, i64> {
    Graph::new()
        .with("base", Node::constant(2))
        .with("left", Node::map("base", |b| b + 1))
        .with("right", Node::map("base", |b| b * 10))
        .with("top", Node::zip("left", "right", |l, r| l * r))
        .with("tail", Node::map("top", |t| t - 1))
        .with(
            "sum",
            Node::new(["base", "left", "right", "top", "tail"], |args: &[i64]| {
                args.iter().sum()
            }),
        )
}
