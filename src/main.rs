fn main() {
    dioxus::launch(halloween_countdown::routes::App);
}
