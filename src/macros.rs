// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! row {
    // Table row shorthand: row!["THY-0001", age.to_string(), ...] → Vec<String>
    ($($cell:expr),* $(,)?) => {
        vec![$(::std::string::String::from($cell)),*]
    };
}

#[macro_export]
macro_rules! headers {
    // Static header list → Option<Vec<String>> (DataSet shape)
    ($list:expr) => {
        Some($list.iter().map(|h| ::std::string::String::from(*h)).collect::<Vec<_>>())
    };
}
