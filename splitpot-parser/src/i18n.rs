#[cfg(all(feature = "es", feature = "en"))]
compile_error!("Cannot enable both 'es' and 'en' features at the same time");

#[cfg(feature = "es")]
pub fn syntax_error_detail(error: impl std::fmt::Display) -> String {
    format!("no se pudo interpretar la línea ({error})")
}

#[cfg(feature = "es")]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("entrada sin interpretar: {input}")
}

#[cfg(not(feature = "es"))]
pub fn syntax_error_detail(error: impl std::fmt::Display) -> String {
    format!("could not parse line ({error})")
}

#[cfg(not(feature = "es"))]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("unparsed input: {input}")
}
