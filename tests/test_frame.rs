use petrel::http::frame::{is_blank, split_blocks, trim_crlf};

#[test]
fn test_split_request_into_blocks() {
    let buf = b"GET / HTTP/1.1\r\nHost: x\r\n\r\n";
    let blocks = split_blocks(buf);

    assert_eq!(
        blocks,
        vec![&b"GET / HTTP/1.1\r\n"[..], &b"Host: x\r\n"[..], &b"\r\n"[..]]
    );
}

#[test]
fn test_split_without_terminator() {
    let blocks = split_blocks(b"GET / HTTP/1.1");

    assert_eq!(blocks, vec![&b"GET / HTTP/1.1"[..]]);
}

#[test]
fn test_split_terminator_at_start() {
    let blocks = split_blocks(b"\r\nbody");

    assert_eq!(blocks, vec![&b"\r\n"[..], &b"body"[..]]);
    assert!(is_blank(blocks[0]));
}

#[test]
fn test_split_trailing_remainder_emitted() {
    let blocks = split_blocks(b"a\r\n\r\nhello");

    assert_eq!(blocks.last().copied(), Some(&b"hello"[..]));
}

#[test]
fn test_blocks_concatenate_to_input() {
    let inputs: [&[u8]; 6] = [
        b"",
        b"\r\n",
        b"\r\n\r\n\r\n",
        b"POST /files/x HTTP/1.1\r\nContent-Length: 4\r\n\r\na\r\nb",
        b"\r",
        b"no terminator at all\n",
    ];

    for input in inputs {
        let joined: Vec<u8> = split_blocks(input).concat();
        assert_eq!(joined, input);
    }
}

#[test]
fn test_trim_crlf() {
    assert_eq!(trim_crlf(b"Host: x\r\n"), b"Host: x");
    assert_eq!(trim_crlf(b"body"), b"body");
}
