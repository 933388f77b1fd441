//! Caller-side statistics and the human readable report printed by the binary.

use std::fmt::{Display, Formatter};
use std::hash::Hash;

use crate::bitstream::bitstring::BitString;
use crate::huffman_coding::code_table::CodeTable;

/// Bits each input symbol takes before compression (one byte per character).
pub const SOURCE_BITS_PER_SYMBOL: usize = 8;

/// Size figures derived from the input length and the encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub symbols: usize,
    pub uncompressed_bits: usize,
    pub compressed_bits: usize,
}

impl Stats {
    pub fn new(symbols: usize, compressed_bits: usize) -> Self {
        Self {
            symbols,
            uncompressed_bits: symbols * SOURCE_BITS_PER_SYMBOL,
            compressed_bits,
        }
    }

    /// Uncompressed over compressed size. None for an empty stream.
    pub fn ratio(&self) -> Option<f64> {
        (self.compressed_bits > 0).then(|| self.uncompressed_bits as f64 / self.compressed_bits as f64)
    }

    /// Fraction of the uncompressed size saved. None for empty input.
    pub fn space_saving(&self) -> Option<f64> {
        (self.uncompressed_bits > 0)
            .then(|| 1.0 - self.compressed_bits as f64 / self.uncompressed_bits as f64)
    }
}

/// Full report: sizes, coding map and the encoded data, with caller chosen display
/// characters for the two bit values.
pub struct Report<'a, S> {
    pub table: &'a CodeTable<S>,
    pub stream: &'a BitString,
    pub stats: Stats,
    pub zero: char,
    pub one: char,
}

impl<S> Display for Report<'_, S>
where
    S: Clone + Eq + Hash + Ord + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "UNCOMPRESSED LENGTH: {} chars", self.stats.symbols)?;
        writeln!(f, "UNCOMPRESSED SIZE: {} bits", self.stats.uncompressed_bits)?;
        writeln!(f, "CODING MAP:")?;
        write!(f, "{}", coding_map(self.table, self.zero, self.one))?;
        writeln!(f, "COMPRESSED DATA:")?;
        writeln!(f, "{}", self.stream.render(self.zero, self.one))?;
        writeln!(f, "COMPRESSED SIZE: {} bits", self.stats.compressed_bits)?;
        if let Some(ratio) = self.stats.ratio() {
            writeln!(f, "COMPRESSION RATIO (NET): {:.4}", ratio)?;
        }
        if let Some(saving) = self.stats.space_saving() {
            writeln!(f, "SPACE SAVING (NET): {:.4}", saving)?;
        }
        Ok(())
    }
}

/// One "symbol: codeword" line per entry, sorted by symbol.
pub fn coding_map<S>(table: &CodeTable<S>, zero: char, one: char) -> String
where
    S: Clone + Eq + Hash + Ord + Display,
{
    let mut entries = table.iter().collect::<Vec<_>>();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .iter()
        .map(|(symbol, code)| format!("{}: {}\n", symbol, code.render(zero, one)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::{coding_map, Report, Stats};
    use crate::huffman_coding::code_table::generate;
    use crate::huffman_coding::codec::encode;
    use crate::huffman_coding::tree::build;
    use crate::tools::freq_count::count;

    #[test]
    fn stats_test() {
        let stats = Stats::new(11, 23);
        assert_eq!(stats.uncompressed_bits, 88);
        assert!((stats.ratio().unwrap() - 88.0 / 23.0).abs() < 1e-9);
        assert!((stats.space_saving().unwrap() - (1.0 - 23.0 / 88.0)).abs() < 1e-9);
        assert_eq!(Stats::new(0, 0).ratio(), None);
        assert_eq!(Stats::new(0, 0).space_saving(), None);
    }

    #[test]
    fn coding_map_test() {
        let table = generate(&build(&count("abracadabra".chars())).unwrap());
        assert_eq!(
            coding_map(&table, '0', '1'),
            "a: 0\nb: 110\nc: 100\nd: 101\nr: 111\n"
        );
        assert_eq!(coding_map(&table, '.', '|'), "a: .\nb: ||.\nc: |..\nd: |.|\nr: |||\n");
    }

    #[test]
    fn report_test() {
        let input = "aabb".chars().collect::<Vec<_>>();
        let table = generate(&build(&count(input.iter().copied())).unwrap());
        let stream = encode(&input, &table).unwrap();
        let report = Report {
            table: &table,
            stream: &stream,
            stats: Stats::new(input.len(), stream.len()),
            zero: '0',
            one: '1',
        };
        let expected = "UNCOMPRESSED LENGTH: 4 chars\n\
                        UNCOMPRESSED SIZE: 32 bits\n\
                        CODING MAP:\n\
                        a: 0\n\
                        b: 1\n\
                        COMPRESSED DATA:\n\
                        0011\n\
                        COMPRESSED SIZE: 4 bits\n\
                        COMPRESSION RATIO (NET): 8.0000\n\
                        SPACE SAVING (NET): 0.8750\n";
        assert_eq!(report.to_string(), expected);
    }
}
