use arch::{inst::Inst, word, MEM_SIZE};
use simpasm::{
    assembler::{assemble, read_source, Assembly},
    error::{Error, LineError},
};

fn run(code: &str) -> Result<Assembly, LineError> {
    let source = read_source(code.as_bytes()).expect("in-memory source");
    assemble(&source)
}

fn words(asm: &Assembly, n: usize) -> Vec<u32> {
    asm.memory.words()[..n].to_vec()
}

macro_rules! case {
    ($name:ident, $code:expr, $expect:expr) => {
        #[test]
        fn $name() {
            let asm = run($code).unwrap();
            let expect: Vec<u32> = $expect;
            assert_eq!(words(&asm, expect.len()), expect);
        }
    };
}

// ----------------------------------------------------------------------------
// Encoding

case!(
    add_short,
    "add $a0, $zero, $zero, 5",
    vec![0b00000000_0011_0000_0000_000_0_00000101]
);
case!(negative_short, "sub $t0, $t0, $imm, -1", vec![0x0177_10FF]);
case!(short_bounds, "add $zero, $zero, $zero, 127\nadd $zero, $zero, $zero, -128", vec![0x0000_007F, 0x0000_0080]);
case!(hex_short, "sll $t0, $t0, $imm, 0x1F", vec![0x0677_101F]);
case!(big_positive, "add $t0, $zero, $imm, 128", vec![0x0070_1100, 128]);
case!(big_negative, "add $t0, $zero, $imm, -129", vec![0x0070_1100, 0xFFFF_FF7F]);
case!(big_hex, "lw $v0, $zero, $imm, 0xABCDEF01", vec![0x1020_1100, 0xABCD_EF01]);
case!(
    branch_to_self,
    "loop:\nbeq $zero,$zero,$zero,loop",
    vec![0x0900_0100, 0]
);
case!(
    label_after_big,
    "jal $ra, $zero, $zero, func\nadd $zero, $zero, $zero, 1000\nfunc:\nhalt $zero, $zero, $zero, 0",
    vec![0x0FF0_0100, 4, 0x0000_0100, 1000, 0x1500_0000]
);

// ----------------------------------------------------------------------------
// Addressing

#[test]
fn label_addresses_ignore_word_directives() {
    let with = run(".word 0x10, 5\nadd $t0, $t0, $imm, 1\nnext:\nbne $zero, $t0, $zero, next").unwrap();
    let without = run("add $t0, $t0, $imm, 1\nnext:\nbne $zero, $t0, $zero, next").unwrap();

    assert_eq!(with.labels.lookup("next").unwrap(), 1);
    assert_eq!(with.used, without.used);
    assert_eq!(words(&with, 3), words(&without, 3));
    assert_eq!(with.memory.get(0x10), Some(5));
    assert_eq!(without.memory.get(0x10), Some(0));
}

#[test]
fn word_directive_forms() {
    let asm = run(
        "start:\n\
         .word 100, -1\n\
         .word 0xFFF, start\n\
         .word table, 0x7FFFFFFF\n\
         halt $zero, $zero, $zero, 0\n\
         table:",
    )
    .unwrap();
    assert_eq!(asm.memory.get(100), Some(0xFFFF_FFFF));
    assert_eq!(asm.memory.get(MEM_SIZE - 1), Some(0));
    assert_eq!(asm.memory.get(1), Some(0x7FFF_FFFF));
    assert_eq!(asm.used, 1);
    assert!(asm.diags.is_empty());
}

#[test]
fn comments_and_blank_lines() {
    let asm = run(
        "# header comment\n\
         \n\
         \t  main:   # entry\n\
         \tadd $sp, $zero, $imm, 0x100   # 2 words\n\
         \n\
         \thalt $zero, $zero, $zero, 0\n",
    )
    .unwrap();
    assert_eq!(asm.labels.get("main").map(|l| (l.address, l.line)), Some((0, 3)));
    assert_eq!(asm.used, 3);
    assert_eq!(asm.lines.len(), 3);
}

// ----------------------------------------------------------------------------
// Round trip through the text image

#[test]
fn text_image_decodes_back() {
    let code = "main:\n\
                add $a0, $zero, $imm, -5\n\
                mul $v0, $a0, $a1, 300\n\
                jal $ra, $zero, $zero, main\n\
                halt $zero, $zero, $zero, 0";
    let asm = run(code).unwrap();

    let mut out = Vec::new();
    asm.memory.write_text(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let image: Vec<u32> = text.lines().map(|l| word::from_bits(l).unwrap()).collect();
    assert_eq!(image.len(), MEM_SIZE);
    assert_eq!(image, asm.memory.words());

    let mut decoded = vec![];
    let mut idx = 0;
    while idx < asm.used {
        let inst = Inst::from_bin(image[idx], image.get(idx + 1).copied()).unwrap();
        idx += inst.width();
        decoded.push(inst.to_string());
    }
    assert_eq!(
        decoded,
        vec![
            "add $a0, $zero, $imm, -5",
            "mul $v0, $a0, $a1, 300",
            "jal $ra, $zero, $zero, 0",
            "halt $zero, $zero, $zero, 0",
        ]
    );
}

// ----------------------------------------------------------------------------
// Errors

macro_rules! fails {
    ($name:ident, $code:expr, $line:expr, $pat:pat) => {
        #[test]
        fn $name() {
            let err = run($code).unwrap_err();
            assert_eq!(err.line_no, $line, "{}", err);
            assert!(matches!(err.error, $pat), "{}", err);
        }
    };
}

fails!(unknown_opcode, "foo $zero,$zero,$zero,1", 1, Error::UnknownOpcode(_));
fails!(
    unknown_register_in_unused_slot,
    "add $t0, $t1, $t2, 0\nhalt $zero, $zero, $bogus, 0",
    2,
    Error::UnknownRegister(_)
);
fails!(unknown_label, "\n\njal $ra, $zero, $zero, nowhere", 3, Error::UnknownLabel(_));
fails!(unknown_word_label, ".word nowhere, 1", 1, Error::UnknownLabel(_));
fails!(duplicate_label, "a:\nadd $zero, $zero, $zero, 0\na:", 3, Error::DuplicateLabel(_, 1));
fails!(short_line, "add $t0, $t1, $t2", 1, Error::MalformedInstruction { expected: 5, found: 4 });
fails!(word_too_short, ".word 4", 1, Error::MalformedInstruction { expected: 3, .. });
fails!(word_negative_address, ".word -1, 0", 1, Error::AddressOutOfRange(-1));
fails!(word_past_end, ".word 4096, 0", 1, Error::AddressOutOfRange(4096));
fails!(bad_hex, "add $t0, $t0, $imm, 0xZZ", 1, Error::InvalidNumber(_));
fails!(empty_label, "  :  ", 1, Error::InvalidLabel(_));

#[test]
fn label_table_limit() {
    let code: String = (0..=simpasm::label::MAX_LABELS)
        .map(|i| format!("l{i}:\n"))
        .collect();
    let err = run(&code).unwrap_err();
    assert_eq!(err.line_no, simpasm::label::MAX_LABELS + 1);
    assert!(matches!(err.error, Error::LabelTableFull(..)));
}
