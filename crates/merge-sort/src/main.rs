use merge_sort::merge_sort;

fn main() {
    let input = [1, 4, 6, 7, 8, 2, 3];
    println!("{:?}", merge_sort(&input));
}
