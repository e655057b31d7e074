/// GET / -- public landing text.
pub async fn greeting() -> &'static str {
    "Welcome to the Casting Agency Management Site!"
}
