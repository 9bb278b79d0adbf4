mod tests {
    use ring_light_composer::bus::{BusHandler, Received};
    use ring_light_composer::registers::{RegisterBank, SENTINEL};

    static BANK: RegisterBank = RegisterBank::new();
    static BUS: BusHandler<'static> = BusHandler::new(&BANK);

    #[test]
    fn test_two_byte_write() {
        let bank = RegisterBank::new();
        let bus = BusHandler::new(&bank);

        assert_eq!(
            bus.on_receive(&[5, 9]),
            Received::Written { address: 5, value: 9 }
        );
        assert_eq!(bank.read(5), 9);
        assert_eq!(bus.latched(), 5);
        assert_eq!(bus.on_request(), 9);
    }

    #[test]
    fn test_single_byte_latches_address() {
        let bank = RegisterBank::new();
        let bus = BusHandler::new(&bank);
        bus.on_receive(&[5, 9]);
        bus.on_receive(&[1, b'B']);

        assert_eq!(
            bus.on_receive(&[5]),
            Received::Latched { address: 5, drained: 0 }
        );
        assert_eq!(bus.on_request(), 9);

        bus.on_receive(&[1]);
        assert_eq!(bus.on_request(), b'B');
    }

    #[test]
    fn test_out_of_range_latch_reads_sentinel() {
        let bank = RegisterBank::new();
        let bus = BusHandler::new(&bank);

        bus.on_receive(&[40]);
        assert_eq!(bus.on_request(), SENTINEL);

        bus.on_receive(&[40, 1]);
        assert_eq!(bus.on_request(), SENTINEL);
        assert_eq!(bank.read(40), SENTINEL);
    }

    #[test]
    fn test_long_transaction_is_drained() {
        let bank = RegisterBank::new();
        let bus = BusHandler::new(&bank);
        let generation = bank.generation();

        assert_eq!(
            bus.on_receive(&[1, b'F', 7, 8]),
            Received::Latched { address: 1, drained: 3 }
        );
        assert_eq!(bank.read(1), 0);
        assert_eq!(bank.generation(), generation);
        assert_eq!(bus.on_request(), 0);
    }

    #[test]
    fn test_empty_transaction() {
        let bank = RegisterBank::new();
        let bus = BusHandler::new(&bank);
        bus.on_receive(&[3]);

        assert_eq!(bus.on_receive(&[]), Received::Empty);
        assert_eq!(bus.latched(), 3);
    }

    #[test]
    fn test_byte_stream() {
        let bank = RegisterBank::new();
        let bus = BusHandler::new(&bank);

        let received = bus.on_receive_bytes([10u8, 1].into_iter());
        assert_eq!(received, Received::Written { address: 10, value: 1 });
        assert!(bank.palette_enabled());

        let received = bus.on_receive_bytes(core::iter::repeat_n(11u8, 5));
        assert_eq!(received, Received::Latched { address: 11, drained: 4 });
        assert_eq!(bank.read(11), 0);
    }

    #[test]
    fn test_static_handler() {
        BUS.on_receive(&[0, 1]);
        assert!(BANK.is_disabled());
        BUS.on_receive(&[0]);
        assert_eq!(BUS.on_request(), 1);
        BUS.on_receive(&[0, 0]);
        assert!(!BANK.is_disabled());
    }
}
