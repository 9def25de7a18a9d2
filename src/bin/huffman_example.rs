use huffman_coder::huffman::HuffmanCodec;
use huffman_coder::Error;

fn main() -> Result<(), Error> {
    let sample = "the quick brown fox jumps over the lazy dog";

    let codec = HuffmanCodec::try_from(sample)?;
    println!("huffman tree\n{}", codec.tree());
    println!("code table\n{}", codec.code_table());

    let encoded = codec.encode(sample.as_bytes())?;
    println!("sequence to encode\n{}", sample);
    println!("encoded sequence ({} bits)\n{}", encoded.len(), encoded);

    let decoded = codec.decode(&encoded)?;
    println!("decoded sequence\n{}", String::from_utf8_lossy(&decoded));
    println!(
        "{} bits instead of {}",
        codec.encoded_bit_count(),
        sample.len() * 8
    );
    Ok(())
}
