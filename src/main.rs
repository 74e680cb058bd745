fn main() {
    banana_dash::game::run();
}
