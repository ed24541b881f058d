//! A composition holding a move-only callable cannot be cloned.

struct Token;

impl Token {
    fn weight(&self) -> usize {
        3
    }
}

fn main() {
    let token = Token;
    let consume = move |x: usize| token.weight() + x;
    let composed = fitting::compose!(|x: usize| x * 2, consume);
    let _copy = composed.clone();
}
