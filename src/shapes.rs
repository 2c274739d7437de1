//! Uniform vs. heterogeneous value shapes behind one `value()` capability.
//!
//! A call site that reads `value()` from a single concrete shape stays
//! monomorphic; one that reads it from a mix of shapes has to dispatch on
//! every element. The datasets here let the harness compare both paths:
//! - [`double_records`] / [`double_numbers`]: one shape, no dispatch
//! - [`double_values`]: `Shape` enum, matched per element
//! - [`double_dyn`]: boxed [`HasValue`] trait objects, vtable per element

use serde::{Deserialize, Serialize};

/// Anything that can be read as a number.
pub trait HasValue {
    /// Numeric reading of this value.
    fn value(&self) -> f64;
}

/// A record carrying its number in a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The stored number.
    pub value: f64,
}

impl HasValue for Record {
    #[inline]
    fn value(&self) -> f64 {
        self.value
    }
}

impl HasValue for f64 {
    #[inline]
    fn value(&self) -> f64 {
        *self
    }
}

impl HasValue for String {
    /// Parsed as an integer; `NaN` when the text is not one.
    #[inline]
    fn value(&self) -> f64 {
        parse_integer(self)
    }
}

/// Closed set of value shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Field access.
    Record(Record),
    /// The number itself.
    Number(f64),
    /// Decimal text, parsed on read.
    Text(String),
}

impl HasValue for Shape {
    #[inline]
    fn value(&self) -> f64 {
        match self {
            Shape::Record(r) => r.value,
            Shape::Number(n) => *n,
            Shape::Text(s) => parse_integer(s),
        }
    }
}

fn parse_integer(s: &str) -> f64 {
    s.trim().parse::<i64>().map(|n| n as f64).unwrap_or(f64::NAN)
}

/// Double every value through the shape-dispatching path.
pub fn double_values(items: &[Shape]) -> Vec<f64> {
    items.iter().map(|item| item.value() * 2.0).collect()
}

/// Double every value through dynamic dispatch.
pub fn double_dyn(items: &[Box<dyn HasValue>]) -> Vec<f64> {
    items.iter().map(|item| item.value() * 2.0).collect()
}

/// Double plain numbers.
pub fn double_numbers(numbers: &[f64]) -> Vec<f64> {
    numbers.iter().map(|n| n * 2.0).collect()
}

/// Double record fields.
pub fn double_records(records: &[Record]) -> Vec<f64> {
    records.iter().map(|r| r.value * 2.0).collect()
}

/// Named datasets of `len` elements each.
#[derive(Debug, Clone)]
pub struct Datasets {
    /// `Record { value: i }`.
    pub records: Vec<Record>,
    /// `i`.
    pub numbers: Vec<f64>,
    /// `i.to_string()`.
    pub texts: Vec<String>,
    /// Records wrapped as shapes.
    pub record_shapes: Vec<Shape>,
    /// Numbers wrapped as shapes.
    pub number_shapes: Vec<Shape>,
    /// Texts wrapped as shapes.
    pub text_shapes: Vec<Shape>,
    /// Records at even indices, numbers at odd ones.
    pub mixed_shapes: Vec<Shape>,
}

impl Datasets {
    /// Build every dataset with `len` elements.
    pub fn new(len: usize) -> Self {
        let numbers: Vec<f64> = (0..len).map(|i| i as f64).collect();
        let records: Vec<Record> = numbers.iter().map(|&value| Record { value }).collect();
        let texts: Vec<String> = (0..len).map(|i| i.to_string()).collect();

        let mixed_shapes = (0..len)
            .map(|i| {
                if i % 2 == 0 {
                    Shape::Record(Record { value: i as f64 })
                } else {
                    Shape::Number(i as f64)
                }
            })
            .collect();

        Self {
            record_shapes: records.iter().copied().map(Shape::Record).collect(),
            number_shapes: numbers.iter().copied().map(Shape::Number).collect(),
            text_shapes: texts.iter().cloned().map(Shape::Text).collect(),
            mixed_shapes,
            records,
            numbers,
            texts,
        }
    }

    /// Mixed dataset as boxed trait objects.
    pub fn mixed_dyn(&self) -> Vec<Box<dyn HasValue>> {
        self.mixed_shapes
            .iter()
            .cloned()
            .map(|s| Box::new(s) as Box<dyn HasValue>)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_reads_the_same() {
        let shapes = [
            Shape::Record(Record { value: 21.0 }),
            Shape::Number(21.0),
            Shape::Text("21".to_string()),
        ];
        assert_eq!(double_values(&shapes), vec![42.0, 42.0, 42.0]);
    }

    #[test]
    fn test_unparseable_text_is_nan() {
        assert!(Shape::Text("twelve".to_string()).value().is_nan());
        assert_eq!("12".to_string().value(), 12.0);
    }

    #[test]
    fn test_paths_agree() {
        let data = Datasets::new(100);
        let expected = double_numbers(&data.numbers);

        assert_eq!(double_records(&data.records), expected);
        assert_eq!(double_values(&data.record_shapes), expected);
        assert_eq!(double_values(&data.number_shapes), expected);
        assert_eq!(double_values(&data.text_shapes), expected);
        assert_eq!(double_values(&data.mixed_shapes), expected);
        assert_eq!(double_dyn(&data.mixed_dyn()), expected);
    }

    #[test]
    fn test_mixed_alternates() {
        let data = Datasets::new(4);
        assert!(matches!(data.mixed_shapes[0], Shape::Record(_)));
        assert!(matches!(data.mixed_shapes[1], Shape::Number(_)));
        assert_eq!(data.texts, vec!["0", "1", "2", "3"]);
    }
}
