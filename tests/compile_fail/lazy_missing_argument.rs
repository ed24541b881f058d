//! A placeholder beyond the supplied arguments is rejected at compile time.

use fitting::call;
use fitting::control::{_2, lazy};

fn main() {
    let expression = call!(lazy(|x: i32| x), _2);
    let _ = call!(expression, 1);
}
