fn main() -> anyhow::Result<()> {
    vocab_study::run()
}
