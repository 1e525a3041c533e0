fn main() {
    bevy_platformer::game::run();
}
