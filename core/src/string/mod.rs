mod case;
mod text;

pub use case::{camel_case, capitalize, kebab_case, pascal_case, snake_case, words};
pub use text::{
    chunk_string, ellipsis, random_string, random_string_with, rune_length, substring,
    ALPHANUMERIC, LOWERCASE, NUMBERS, UPPERCASE,
};
