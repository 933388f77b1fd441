use crate::bitstream::bitstring::BitString;

/// Packs bits into bytes, most significant bit first.
pub struct BitWriter {
    /// Output buffer of completed bytes.
    output: Vec<u8>,
    /// Private queue holding bits that have not yet filled a byte.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
}

impl BitWriter {
    /// Create a new BitWriter. Capacity is in bytes; it only sizes the first allocation.
    pub fn new(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Move every full byte from the queue to the output buffer.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Put a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        if self.q_bits > 56 {
            self.write_stream();
        }
    }

    /// Put every bit of a codeword (or whole encoded stream) on the stream.
    pub fn out_bits(&mut self, bits: &BitString) {
        bits.iter().for_each(|bit| self.out_bit(bit));
    }

    /// Flushes the remaining bits, padding the last byte with 0s in the least significant
    /// bits. Returns the packed bytes and how many padding bits were added (0-7).
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        self.write_stream();
        let mut padding = 0;
        if self.q_bits > 0 {
            padding = 8 - self.q_bits;
            self.queue <<= padding; //pad the queue with zeros
            self.q_bits += padding;
            self.write_stream();
        }
        (self.output, padding)
    }
}
