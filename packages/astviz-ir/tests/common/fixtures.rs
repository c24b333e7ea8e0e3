//! Python source fixtures

pub const HELLO_WORLD: &str = r#"print("Hello, World!")"#;

pub const FUNCTION: &str = r#"def greet(name):
    return f"Hello, {name}!"

result = greet("Alice")
"#;

pub const CLASS: &str = r#"class Person:
    def __init__(self, name, age):
        self.name = name
        self.age = age

    def introduce(self):
        return f"I am {self.name}, {self.age} years old"

p = Person("Bob", 30)
"#;

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

/// All valid fixtures
pub fn valid_sources() -> Vec<&'static str> {
    vec![HELLO_WORLD, FUNCTION, CLASS, LOOP_AND_CONDITION, LAMBDA]
}

/// Generate a Python file with N functions
pub fn fixture_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("def func_{i}(x):\n    return x + {i}\n"))
        .collect()
}
