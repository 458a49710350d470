//! Built-in workshop vocabulary.
//!
//! Stored as written; `WordBook::with_words` normalizes on load, so mixed
//! case entries and the repeated `append` are harmless.

pub const SEED_WORDS: &[&str] = &[
    "Python", "coding", "programming", "variables", "functions", "loops",
    "conditionals", "syntax", "debugging", "interpreter", "script", "module",
    "package", "pip", "virtualenv", "IDE", "editor", "terminal", "print", "input",
    "list", "dictionary", "tuple", "set", "string", "integer", "float", "boolean",
    "if", "for", "while", "import", "def", "class", "object", "exception", "try",
    "except", "data", "automation", "file", "open", "read", "write", "append",
    "comment", "indentation", "error", "traceback", "args", "kwargs", "loop",
    "range", "len", "type", "index", "slice", "pop", "append", "extend", "remove",
    "sort", "reverse", "lambda", "map", "filter", "reduce", "comprehension",
    "scope", "global", "local", "return", "None", "True", "False", "is", "in",
    "not", "and", "or", "elif", "assert", "with", "as", "pass", "continue",
    "break", "help", "dir", "zip", "enumerate", "built-in", "standard library",
];
