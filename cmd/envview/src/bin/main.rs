fn main() {
    envview::main();
}
