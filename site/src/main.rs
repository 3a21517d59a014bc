fn main() {
    portfolio_site::start();
}
