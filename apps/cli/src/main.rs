fn main() -> anyhow::Result<()> {
    chess_cards::run()
}
