/// Naive double-recursive fibonacci.
///
/// The `n <= 1` base case covers fib(0) = 0 and fib(1) = 1, and makes every
/// negative index degenerate to returning `n` itself. Additions wrap on
/// overflow (first wrap at n = 93). Stack depth grows linearly with `n`
/// along the left spine of the recursion tree.
pub fn fib(n: i64) -> i64 {
    if n <= 1 {
        n
    } else {
        fib(n - 1).wrapping_add(fib(n - 2))
    }
}
