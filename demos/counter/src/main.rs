fn main() {
    counter_view::start();
}
