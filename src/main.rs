fn main() {
    authtool::run_cli();
}
