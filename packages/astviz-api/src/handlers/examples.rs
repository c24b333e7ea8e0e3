//! GET /api/examples
//!
//! Fixed Python snippets the frontend offers as starting points.

use serde_json::{Map, Value};

use crate::response::ApiResponse;

pub const HELLO_WORLD: &str = r#"print("Hello, World!")"#;

pub const FUNCTION: &str = r#"def greet(name):
    return f"Hello, {name}!"

result = greet("Alice")
"#;

// The blank line inside the class keeps its indentation
pub const CLASS: &str = "class Person:
    def __init__(self, name, age):
        self.name = name
        self.age = age
    
    def introduce(self):
        return f\"I am {self.name}, {self.age} years old\"

p = Person(\"Bob\", 30)
";

pub const LOOP_AND_CONDITION: &str = r#"for i in range(10):
    if i % 2 == 0:
        print(f"{i} is even")
    else:
        print(f"{i} is odd")
"#;

pub const LAMBDA: &str = r#"numbers = [1, 2, 3, 4, 5]
squared = list(map(lambda x: x ** 2, numbers))
filtered = list(filter(lambda x: x > 5, squared))
"#;

/// Example name → source
pub const EXAMPLES: &[(&str, &str)] = &[
    ("hello_world", HELLO_WORLD),
    ("function", FUNCTION),
    ("class", CLASS),
    ("loop_and_condition", LOOP_AND_CONDITION),
    ("lambda", LAMBDA),
];

pub fn examples_map() -> Map<String, Value> {
    EXAMPLES
        .iter()
        .map(|(name, source)| (name.to_string(), Value::from(*source)))
        .collect()
}

pub fn handle() -> ApiResponse {
    ApiResponse::ok(Value::Object(examples_map()))
}
