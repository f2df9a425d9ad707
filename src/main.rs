fn main() {
    scrap_crafters::start();
}
