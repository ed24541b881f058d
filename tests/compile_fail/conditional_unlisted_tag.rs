//! A tag that no candidate accepts is rejected at compile time.

use fitting::call;

struct Listed;
struct AlsoListed;
struct Unlisted;

fn main() {
    let dispatch = fitting::conditional!(|_: Listed| 1, |_: AlsoListed| 2);
    let _ = call!(dispatch, Unlisted);
}
