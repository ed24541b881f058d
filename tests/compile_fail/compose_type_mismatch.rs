//! The output of the inner callable must be accepted by the outer one.

use fitting::call;

fn main() {
    let length = |text: &str| text.len();
    let negate = |x: i32| -x;
    let _ = call!(fitting::compose!(negate, length), "text");
}
