//! HT32F1654 reference data.
//!
//! Holtek HT32F1654: Cortex-M3 core, 16 KiB SRAM at 0x2000_0000, flash
//! mapped from address 0. The catalog follows the startup vector layout
//! (system exceptions, then the 63 NVIC lines) and the register map covers
//! the on-chip peripherals plus the core's SysTick/NVIC/SCB blocks.

use crate::device::{DeviceProfile, InterruptCatalog, MemoryRange, RegisterMap};

/// SRAM base address.
pub const SRAM_BASE: u64 = 0x2000_0000;

/// SRAM size in bytes.
pub const SRAM_SIZE: u64 = 0x4000;

/// Reset vectors above this are not produced by the vendor toolchain.
pub const MAX_RESET_VECTOR: u32 = 0xFFFF;

/// Handler names for vector table words 1 onwards.
pub const INTERRUPTS: [&str; 78] = [
    // System exceptions
    "Reset_Handler",
    "NMI_Handler",
    "HardFault_Handler",
    "MemManage_Handler",
    "BusFault_Handler",
    "UsageFault_Handler",
    "Reserved_7",
    "Reserved_8",
    "Reserved_9",
    "Reserved_10",
    "SVC_Handler",
    "DebugMon_Handler",
    "Reserved_13",
    "PendSV_Handler",
    "SysTick_Handler",
    // NVIC interrupt lines
    "CKRDY_IRQHandler",
    "LVD_IRQHandler",
    "BOD_IRQHandler",
    "WDT_IRQHandler",
    "RTC_IRQHandler",
    "FLASH_IRQHandler",
    "EVWUP_IRQHandler",
    "LPWUP_IRQHandler",
    "EXTI0_IRQHandler",
    "EXTI1_IRQHandler",
    "EXTI2_IRQHandler",
    "EXTI3_IRQHandler",
    "EXTI4_IRQHandler",
    "EXTI5_IRQHandler",
    "EXTI6_IRQHandler",
    "EXTI7_IRQHandler",
    "EXTI8_IRQHandler",
    "EXTI9_IRQHandler",
    "EXTI10_IRQHandler",
    "EXTI11_IRQHandler",
    "EXTI12_IRQHandler",
    "EXTI13_IRQHandler",
    "EXTI14_IRQHandler",
    "EXTI15_IRQHandler",
    "COMP_IRQHandler",
    "ADC_IRQHandler",
    "Reserved_IRQ26",
    "MCTM0BRK_IRQHandler",
    "MCTM0UP_IRQHandler",
    "MCTM0TR_UP2_IRQHandler",
    "MCTM0CC_IRQHandler",
    "Reserved_IRQ31",
    "Reserved_IRQ32",
    "Reserved_IRQ33",
    "Reserved_IRQ34",
    "GPTM0_IRQHandler",
    "GPTM1_IRQHandler",
    "Reserved_IRQ37",
    "Reserved_IRQ38",
    "Reserved_IRQ39",
    "Reserved_IRQ40",
    "BFTM0_IRQHandler",
    "BFTM1_IRQHandler",
    "I2C0_IRQHandler",
    "I2C1_IRQHandler",
    "SPI0_IRQHandler",
    "SPI1_IRQHandler",
    "USART0_IRQHandler",
    "USART1_IRQHandler",
    "UART0_IRQHandler",
    "UART1_IRQHandler",
    "SCI_IRQHandler",
    "I2S_IRQHandler",
    "USB_IRQHandler",
    "Reserved_IRQ54",
    "PDMA_CH0_IRQHandler",
    "PDMA_CH1_IRQHandler",
    "PDMA_CH2_IRQHandler",
    "PDMA_CH3_IRQHandler",
    "PDMA_CH4_IRQHandler",
    "PDMA_CH5_IRQHandler",
    "PDMA_CH6_IRQHandler",
    "PDMA_CH7_IRQHandler",
];

/// Peripheral register addresses.
pub const REGISTERS: [(u32, &str); 512] = [
    // USART0
    (0x4000_0000, "USART0_DR"),
    (0x4000_0004, "USART0_IER"),
    (0x4000_0008, "USART0_IIR"),
    (0x4000_000C, "USART0_FCR"),
    (0x4000_0010, "USART0_LCR"),
    (0x4000_0014, "USART0_MODCR"),
    (0x4000_0018, "USART0_LSR"),
    (0x4000_001C, "USART0_MODSR"),
    (0x4000_0020, "USART0_TPR"),
    (0x4000_0024, "USART0_MDR"),
    (0x4000_002C, "USART0_DLR"),
    (0x4000_0030, "USART0_DEGTSTR"),
    // UART0
    (0x4000_1000, "UART0_DR"),
    (0x4000_1004, "UART0_IER"),
    (0x4000_1008, "UART0_IIR"),
    (0x4000_100C, "UART0_FCR"),
    (0x4000_1010, "UART0_LCR"),
    (0x4000_1014, "UART0_MODCR"),
    (0x4000_1018, "UART0_LSR"),
    (0x4000_101C, "UART0_MODSR"),
    (0x4000_1020, "UART0_TPR"),
    (0x4000_1024, "UART0_MDR"),
    (0x4000_102C, "UART0_DLR"),
    (0x4000_1030, "UART0_DEGTSTR"),
    // SPI0
    (0x4000_4000, "SPI0_CR0"),
    (0x4000_4004, "SPI0_CR1"),
    (0x4000_4008, "SPI0_IER"),
    (0x4000_400C, "SPI0_CPR"),
    (0x4000_4010, "SPI0_DR"),
    (0x4000_4014, "SPI0_SR"),
    (0x4000_4018, "SPI0_FCR"),
    (0x4000_401C, "SPI0_FSR"),
    (0x4000_4020, "SPI0_FTOCR"),
    // ADC
    (0x4001_0000, "ADC_CR"),
    (0x4001_0004, "ADC_LST0"),
    (0x4001_0008, "ADC_LST1"),
    (0x4001_0024, "ADC_STR"),
    (0x4001_0030, "ADC_TCR"),
    (0x4001_0040, "ADC_DR0"),
    (0x4001_0044, "ADC_DR1"),
    (0x4001_0048, "ADC_DR2"),
    (0x4001_004C, "ADC_DR3"),
    (0x4001_0050, "ADC_DR4"),
    (0x4001_0054, "ADC_DR5"),
    (0x4001_0058, "ADC_DR6"),
    (0x4001_005C, "ADC_DR7"),
    (0x4001_0070, "ADC_IER"),
    (0x4001_0074, "ADC_IRAW"),
    (0x4001_0078, "ADC_ISR"),
    (0x4001_007C, "ADC_ICLR"),
    // Comparator / OPA
    (0x4001_8000, "CMP_OPACR0"),
    (0x4001_8004, "CMP_OFVCR0"),
    (0x4001_8008, "CMP_CMPIER0"),
    (0x4001_800C, "CMP_CMPRSR0"),
    (0x4001_8010, "CMP_CMPISR0"),
    (0x4001_8014, "CMP_CMPICLR0"),
    // AFIO
    (0x4002_2000, "AFIO_ESSR0"),
    (0x4002_2004, "AFIO_ESSR1"),
    (0x4002_2008, "AFIO_GPACFGR"),
    (0x4002_200C, "AFIO_GPBCFGR"),
    (0x4002_2010, "AFIO_GPCCFGR"),
    (0x4002_2014, "AFIO_GPDCFGR"),
    (0x4002_2018, "AFIO_GPECFGR"),
    // EXTI
    (0x4002_4000, "EXTI_CFGR0"),
    (0x4002_4004, "EXTI_CFGR1"),
    (0x4002_4008, "EXTI_CFGR2"),
    (0x4002_400C, "EXTI_CFGR3"),
    (0x4002_4010, "EXTI_CFGR4"),
    (0x4002_4014, "EXTI_CFGR5"),
    (0x4002_4018, "EXTI_CFGR6"),
    (0x4002_401C, "EXTI_CFGR7"),
    (0x4002_4020, "EXTI_CFGR8"),
    (0x4002_4024, "EXTI_CFGR9"),
    (0x4002_4028, "EXTI_CFGR10"),
    (0x4002_402C, "EXTI_CFGR11"),
    (0x4002_4030, "EXTI_CFGR12"),
    (0x4002_4034, "EXTI_CFGR13"),
    (0x4002_4038, "EXTI_CFGR14"),
    (0x4002_403C, "EXTI_CFGR15"),
    (0x4002_4040, "EXTI_ICR"),
    (0x4002_4044, "EXTI_EDGEFLGR"),
    (0x4002_4048, "EXTI_EDGESR"),
    (0x4002_404C, "EXTI_SSCR"),
    (0x4002_4050, "EXTI_WAKUPCR"),
    (0x4002_4054, "EXTI_WAKUPPOLR"),
    (0x4002_4058, "EXTI_WAKUPFLG"),
    // I2S
    (0x4002_6000, "I2S_CR"),
    (0x4002_6004, "I2S_IER"),
    (0x4002_6008, "I2S_CDR"),
    (0x4002_600C, "I2S_TXDR"),
    (0x4002_6010, "I2S_RXDR"),
    (0x4002_6014, "I2S_FCR"),
    (0x4002_6018, "I2S_SR"),
    (0x4002_601C, "I2S_RCNTR"),
    // MCTM0
    (0x4002_C000, "MCTM0_CNTCFR"),
    (0x4002_C004, "MCTM0_MDCFR"),
    (0x4002_C008, "MCTM0_TRCFR"),
    (0x4002_C010, "MCTM0_CTR"),
    (0x4002_C020, "MCTM0_CH0ICFR"),
    (0x4002_C024, "MCTM0_CH1ICFR"),
    (0x4002_C028, "MCTM0_CH2ICFR"),
    (0x4002_C02C, "MCTM0_CH3ICFR"),
    (0x4002_C040, "MCTM0_CH0OCFR"),
    (0x4002_C044, "MCTM0_CH1OCFR"),
    (0x4002_C048, "MCTM0_CH2OCFR"),
    (0x4002_C04C, "MCTM0_CH3OCFR"),
    (0x4002_C050, "MCTM0_CHCTR"),
    (0x4002_C054, "MCTM0_CHPOLR"),
    (0x4002_C06C, "MCTM0_CHBRKCFR"),
    (0x4002_C070, "MCTM0_CHBRKCTR"),
    (0x4002_C074, "MCTM0_DICTR"),
    (0x4002_C078, "MCTM0_EVGR"),
    (0x4002_C07C, "MCTM0_INTSR"),
    (0x4002_C080, "MCTM0_CNTR"),
    (0x4002_C084, "MCTM0_PSCR"),
    (0x4002_C088, "MCTM0_CRR"),
    (0x4002_C08C, "MCTM0_REPR"),
    (0x4002_C090, "MCTM0_CH0CCR"),
    (0x4002_C094, "MCTM0_CH1CCR"),
    (0x4002_C098, "MCTM0_CH2CCR"),
    (0x4002_C09C, "MCTM0_CH3CCR"),
    // USART1
    (0x4004_0000, "USART1_DR"),
    (0x4004_0004, "USART1_IER"),
    (0x4004_0008, "USART1_IIR"),
    (0x4004_000C, "USART1_FCR"),
    (0x4004_0010, "USART1_LCR"),
    (0x4004_0014, "USART1_MODCR"),
    (0x4004_0018, "USART1_LSR"),
    (0x4004_001C, "USART1_MODSR"),
    (0x4004_0020, "USART1_TPR"),
    (0x4004_0024, "USART1_MDR"),
    (0x4004_002C, "USART1_DLR"),
    (0x4004_0030, "USART1_DEGTSTR"),
    // UART1
    (0x4004_1000, "UART1_DR"),
    (0x4004_1004, "UART1_IER"),
    (0x4004_1008, "UART1_IIR"),
    (0x4004_100C, "UART1_FCR"),
    (0x4004_1010, "UART1_LCR"),
    (0x4004_1014, "UART1_MODCR"),
    (0x4004_1018, "UART1_LSR"),
    (0x4004_101C, "UART1_MODSR"),
    (0x4004_1020, "UART1_TPR"),
    (0x4004_1024, "UART1_MDR"),
    (0x4004_102C, "UART1_DLR"),
    (0x4004_1030, "UART1_DEGTSTR"),
    // SCI
    (0x4004_3000, "SCI_CR"),
    (0x4004_3004, "SCI_SR"),
    (0x4004_3008, "SCI_CCR"),
    (0x4004_300C, "SCI_ETU"),
    (0x4004_3010, "SCI_GT"),
    (0x4004_3014, "SCI_WT"),
    (0x4004_3018, "SCI_IER"),
    (0x4004_301C, "SCI_IPR"),
    (0x4004_3020, "SCI_TXB"),
    (0x4004_3024, "SCI_RXB"),
    (0x4004_3028, "SCI_PSCR"),
    // SPI1
    (0x4004_4000, "SPI1_CR0"),
    (0x4004_4004, "SPI1_CR1"),
    (0x4004_4008, "SPI1_IER"),
    (0x4004_400C, "SPI1_CPR"),
    (0x4004_4010, "SPI1_DR"),
    (0x4004_4014, "SPI1_SR"),
    (0x4004_4018, "SPI1_FCR"),
    (0x4004_401C, "SPI1_FSR"),
    (0x4004_4020, "SPI1_FTOCR"),
    // I2C0
    (0x4004_8000, "I2C0_CR"),
    (0x4004_8004, "I2C0_IER"),
    (0x4004_8008, "I2C0_ADDR"),
    (0x4004_800C, "I2C0_SR"),
    (0x4004_8010, "I2C0_SHPGR"),
    (0x4004_8014, "I2C0_SLPGR"),
    (0x4004_8018, "I2C0_DR"),
    (0x4004_801C, "I2C0_TAR"),
    // I2C1
    (0x4004_9000, "I2C1_CR"),
    (0x4004_9004, "I2C1_IER"),
    (0x4004_9008, "I2C1_ADDR"),
    (0x4004_900C, "I2C1_SR"),
    (0x4004_9010, "I2C1_SHPGR"),
    (0x4004_9014, "I2C1_SLPGR"),
    (0x4004_9018, "I2C1_DR"),
    (0x4004_901C, "I2C1_TAR"),
    // WDT
    (0x4006_8000, "WDT_CR"),
    (0x4006_8004, "WDT_MR0"),
    (0x4006_8008, "WDT_MR1"),
    (0x4006_800C, "WDT_SR"),
    (0x4006_8010, "WDT_PR"),
    (0x4006_8018, "WDT_CSR"),
    // RTC
    (0x4006_A000, "RTC_CNT"),
    (0x4006_A004, "RTC_CMP"),
    (0x4006_A008, "RTC_CR"),
    (0x4006_A00C, "RTC_SR"),
    (0x4006_A010, "RTC_IWEN"),
    // PWRCU
    (0x4006_A100, "PWRCU_BAKSR"),
    (0x4006_A104, "PWRCU_BAKCR"),
    (0x4006_A108, "PWRCU_BAKTEST"),
    (0x4006_A10C, "PWRCU_HSIRCR"),
    (0x4006_A110, "PWRCU_LVDCSR"),
    (0x4006_A200, "PWRCU_BAKREG0"),
    (0x4006_A204, "PWRCU_BAKREG1"),
    (0x4006_A208, "PWRCU_BAKREG2"),
    (0x4006_A20C, "PWRCU_BAKREG3"),
    // GPTM0
    (0x4006_E000, "GPTM0_CNTCFR"),
    (0x4006_E004, "GPTM0_MDCFR"),
    (0x4006_E008, "GPTM0_TRCFR"),
    (0x4006_E010, "GPTM0_CTR"),
    (0x4006_E020, "GPTM0_CH0ICFR"),
    (0x4006_E024, "GPTM0_CH1ICFR"),
    (0x4006_E028, "GPTM0_CH2ICFR"),
    (0x4006_E02C, "GPTM0_CH3ICFR"),
    (0x4006_E040, "GPTM0_CH0OCFR"),
    (0x4006_E044, "GPTM0_CH1OCFR"),
    (0x4006_E048, "GPTM0_CH2OCFR"),
    (0x4006_E04C, "GPTM0_CH3OCFR"),
    (0x4006_E050, "GPTM0_CHCTR"),
    (0x4006_E054, "GPTM0_CHPOLR"),
    (0x4006_E074, "GPTM0_DICTR"),
    (0x4006_E078, "GPTM0_EVGR"),
    (0x4006_E07C, "GPTM0_INTSR"),
    (0x4006_E080, "GPTM0_CNTR"),
    (0x4006_E084, "GPTM0_PSCR"),
    (0x4006_E088, "GPTM0_CRR"),
    (0x4006_E090, "GPTM0_CH0CCR"),
    (0x4006_E094, "GPTM0_CH1CCR"),
    (0x4006_E098, "GPTM0_CH2CCR"),
    (0x4006_E09C, "GPTM0_CH3CCR"),
    // GPTM1
    (0x4006_F000, "GPTM1_CNTCFR"),
    (0x4006_F004, "GPTM1_MDCFR"),
    (0x4006_F008, "GPTM1_TRCFR"),
    (0x4006_F010, "GPTM1_CTR"),
    (0x4006_F020, "GPTM1_CH0ICFR"),
    (0x4006_F024, "GPTM1_CH1ICFR"),
    (0x4006_F028, "GPTM1_CH2ICFR"),
    (0x4006_F02C, "GPTM1_CH3ICFR"),
    (0x4006_F040, "GPTM1_CH0OCFR"),
    (0x4006_F044, "GPTM1_CH1OCFR"),
    (0x4006_F048, "GPTM1_CH2OCFR"),
    (0x4006_F04C, "GPTM1_CH3OCFR"),
    (0x4006_F050, "GPTM1_CHCTR"),
    (0x4006_F054, "GPTM1_CHPOLR"),
    (0x4006_F074, "GPTM1_DICTR"),
    (0x4006_F078, "GPTM1_EVGR"),
    (0x4006_F07C, "GPTM1_INTSR"),
    (0x4006_F080, "GPTM1_CNTR"),
    (0x4006_F084, "GPTM1_PSCR"),
    (0x4006_F088, "GPTM1_CRR"),
    (0x4006_F090, "GPTM1_CH0CCR"),
    (0x4006_F094, "GPTM1_CH1CCR"),
    (0x4006_F098, "GPTM1_CH2CCR"),
    (0x4006_F09C, "GPTM1_CH3CCR"),
    // BFTM0
    (0x4007_6000, "BFTM0_CR"),
    (0x4007_6004, "BFTM0_SR"),
    (0x4007_6008, "BFTM0_CNTR"),
    (0x4007_600C, "BFTM0_CMPR"),
    // BFTM1
    (0x4007_7000, "BFTM1_CR"),
    (0x4007_7004, "BFTM1_SR"),
    (0x4007_7008, "BFTM1_CNTR"),
    (0x4007_700C, "BFTM1_CMPR"),
    // Flash memory controller
    (0x4008_0000, "FMC_TADR"),
    (0x4008_0004, "FMC_WRDR"),
    (0x4008_000C, "FMC_OCMR"),
    (0x4008_0010, "FMC_OPCR"),
    (0x4008_0014, "FMC_OIER"),
    (0x4008_0018, "FMC_OISR"),
    (0x4008_0020, "FMC_PPSR0"),
    (0x4008_0024, "FMC_PPSR1"),
    (0x4008_0030, "FMC_CPSR"),
    (0x4008_0100, "FMC_VMCR"),
    (0x4008_0180, "FMC_MDID"),
    (0x4008_0184, "FMC_PNSR"),
    (0x4008_0188, "FMC_PCSR"),
    (0x4008_0200, "FMC_CFCR"),
    (0x4008_0300, "FMC_SBVT0"),
    (0x4008_0304, "FMC_SBVT1"),
    (0x4008_0308, "FMC_SBVT2"),
    (0x4008_030C, "FMC_SBVT3"),
    (0x4008_0310, "FMC_CIDR0"),
    (0x4008_0314, "FMC_CIDR1"),
    (0x4008_0318, "FMC_CIDR2"),
    (0x4008_031C, "FMC_CIDR3"),
    // Clock control unit
    (0x4008_8000, "CKCU_GCFGR"),
    (0x4008_8004, "CKCU_GCCR"),
    (0x4008_8008, "CKCU_GCSR"),
    (0x4008_800C, "CKCU_GCIR"),
    (0x4008_8018, "CKCU_PLLCFGR"),
    (0x4008_801C, "CKCU_PLLCR"),
    (0x4008_8020, "CKCU_AHBCFGR"),
    (0x4008_8024, "CKCU_AHBCCR"),
    (0x4008_8028, "CKCU_APBCFGR"),
    (0x4008_802C, "CKCU_APBCCR0"),
    (0x4008_8030, "CKCU_APBCCR1"),
    (0x4008_8034, "CKCU_CKST"),
    (0x4008_8300, "CKCU_LPCR"),
    (0x4008_8304, "CKCU_MCUDBGCR"),
    // Reset control unit
    (0x4008_8100, "RSTCU_GRSR"),
    (0x4008_8104, "RSTCU_AHBPRSTR"),
    (0x4008_8108, "RSTCU_APBPRSTR0"),
    (0x4008_810C, "RSTCU_APBPRSTR1"),
    // CRC
    (0x4008_A000, "CRC_CR"),
    (0x4008_A004, "CRC_SDR"),
    (0x4008_A008, "CRC_CSR"),
    (0x4008_A00C, "CRC_DR"),
    // PDMA
    (0x4009_0000, "PDMA_CH0CR"),
    (0x4009_0004, "PDMA_CH0SADR"),
    (0x4009_0008, "PDMA_CH0DADR"),
    (0x4009_000C, "PDMA_CH0CADR"),
    (0x4009_0010, "PDMA_CH0TSR"),
    (0x4009_0014, "PDMA_CH0CTSR"),
    (0x4009_0018, "PDMA_CH1CR"),
    (0x4009_001C, "PDMA_CH1SADR"),
    (0x4009_0020, "PDMA_CH1DADR"),
    (0x4009_0024, "PDMA_CH1CADR"),
    (0x4009_0028, "PDMA_CH1TSR"),
    (0x4009_002C, "PDMA_CH1CTSR"),
    (0x4009_0030, "PDMA_CH2CR"),
    (0x4009_0034, "PDMA_CH2SADR"),
    (0x4009_0038, "PDMA_CH2DADR"),
    (0x4009_003C, "PDMA_CH2CADR"),
    (0x4009_0040, "PDMA_CH2TSR"),
    (0x4009_0044, "PDMA_CH2CTSR"),
    (0x4009_0048, "PDMA_CH3CR"),
    (0x4009_004C, "PDMA_CH3SADR"),
    (0x4009_0050, "PDMA_CH3DADR"),
    (0x4009_0054, "PDMA_CH3CADR"),
    (0x4009_0058, "PDMA_CH3TSR"),
    (0x4009_005C, "PDMA_CH3CTSR"),
    (0x4009_0060, "PDMA_CH4CR"),
    (0x4009_0064, "PDMA_CH4SADR"),
    (0x4009_0068, "PDMA_CH4DADR"),
    (0x4009_006C, "PDMA_CH4CADR"),
    (0x4009_0070, "PDMA_CH4TSR"),
    (0x4009_0074, "PDMA_CH4CTSR"),
    (0x4009_0078, "PDMA_CH5CR"),
    (0x4009_007C, "PDMA_CH5SADR"),
    (0x4009_0080, "PDMA_CH5DADR"),
    (0x4009_0084, "PDMA_CH5CADR"),
    (0x4009_0088, "PDMA_CH5TSR"),
    (0x4009_008C, "PDMA_CH5CTSR"),
    (0x4009_0090, "PDMA_CH6CR"),
    (0x4009_0094, "PDMA_CH6SADR"),
    (0x4009_0098, "PDMA_CH6DADR"),
    (0x4009_009C, "PDMA_CH6CADR"),
    (0x4009_00A0, "PDMA_CH6TSR"),
    (0x4009_00A4, "PDMA_CH6CTSR"),
    (0x4009_00A8, "PDMA_CH7CR"),
    (0x4009_00AC, "PDMA_CH7SADR"),
    (0x4009_00B0, "PDMA_CH7DADR"),
    (0x4009_00B4, "PDMA_CH7CADR"),
    (0x4009_00B8, "PDMA_CH7TSR"),
    (0x4009_00BC, "PDMA_CH7CTSR"),
    (0x4009_0120, "PDMA_ISR0"),
    (0x4009_0124, "PDMA_ISR1"),
    (0x4009_0128, "PDMA_ISCR0"),
    (0x4009_012C, "PDMA_ISCR1"),
    (0x4009_0130, "PDMA_IER0"),
    (0x4009_0134, "PDMA_IER1"),
    // EBI
    (0x4009_8000, "EBI_CR"),
    (0x4009_8004, "EBI_PCR"),
    (0x4009_8008, "EBI_SR"),
    (0x4009_8010, "EBI_ATR0"),
    (0x4009_8014, "EBI_RTR0"),
    (0x4009_8018, "EBI_WTR0"),
    (0x4009_801C, "EBI_PR0"),
    (0x4009_8020, "EBI_IEN"),
    (0x4009_8024, "EBI_IF"),
    (0x4009_8028, "EBI_IFC"),
    // USB
    (0x400A_8000, "USB_CSR"),
    (0x400A_8004, "USB_IER"),
    (0x400A_8008, "USB_ISR"),
    (0x400A_800C, "USB_FCR"),
    (0x400A_8010, "USB_DEVAR"),
    (0x400A_8014, "USB_EP0CSR"),
    (0x400A_8018, "USB_EP0IER"),
    (0x400A_801C, "USB_EP0ISR"),
    (0x400A_8020, "USB_EP0TCR"),
    (0x400A_8024, "USB_EP0CFGR"),
    (0x400A_8028, "USB_EP1CSR"),
    (0x400A_802C, "USB_EP1IER"),
    (0x400A_8030, "USB_EP1ISR"),
    (0x400A_8034, "USB_EP1TCR"),
    (0x400A_8038, "USB_EP1CFGR"),
    (0x400A_803C, "USB_EP2CSR"),
    (0x400A_8040, "USB_EP2IER"),
    (0x400A_8044, "USB_EP2ISR"),
    (0x400A_8048, "USB_EP2TCR"),
    (0x400A_804C, "USB_EP2CFGR"),
    (0x400A_8050, "USB_EP3CSR"),
    (0x400A_8054, "USB_EP3IER"),
    (0x400A_8058, "USB_EP3ISR"),
    (0x400A_805C, "USB_EP3TCR"),
    (0x400A_8060, "USB_EP3CFGR"),
    (0x400A_8064, "USB_EP4CSR"),
    (0x400A_8068, "USB_EP4IER"),
    (0x400A_806C, "USB_EP4ISR"),
    (0x400A_8070, "USB_EP4TCR"),
    (0x400A_8074, "USB_EP4CFGR"),
    (0x400A_8078, "USB_EP5CSR"),
    (0x400A_807C, "USB_EP5IER"),
    (0x400A_8080, "USB_EP5ISR"),
    (0x400A_8084, "USB_EP5TCR"),
    (0x400A_8088, "USB_EP5CFGR"),
    (0x400A_808C, "USB_EP6CSR"),
    (0x400A_8090, "USB_EP6IER"),
    (0x400A_8094, "USB_EP6ISR"),
    (0x400A_8098, "USB_EP6TCR"),
    (0x400A_809C, "USB_EP6CFGR"),
    (0x400A_80A0, "USB_EP7CSR"),
    (0x400A_80A4, "USB_EP7IER"),
    (0x400A_80A8, "USB_EP7ISR"),
    (0x400A_80AC, "USB_EP7TCR"),
    (0x400A_80B0, "USB_EP7CFGR"),
    // GPIOA
    (0x400B_0000, "GPIOA_DIRCR"),
    (0x400B_0004, "GPIOA_INER"),
    (0x400B_0008, "GPIOA_PUR"),
    (0x400B_000C, "GPIOA_PDR"),
    (0x400B_0010, "GPIOA_ODR"),
    (0x400B_0014, "GPIOA_DRVR"),
    (0x400B_0018, "GPIOA_LOCKR"),
    (0x400B_001C, "GPIOA_DINR"),
    (0x400B_0020, "GPIOA_DOUTR"),
    (0x400B_0024, "GPIOA_SRR"),
    (0x400B_0028, "GPIOA_RR"),
    // GPIOB
    (0x400B_2000, "GPIOB_DIRCR"),
    (0x400B_2004, "GPIOB_INER"),
    (0x400B_2008, "GPIOB_PUR"),
    (0x400B_200C, "GPIOB_PDR"),
    (0x400B_2010, "GPIOB_ODR"),
    (0x400B_2014, "GPIOB_DRVR"),
    (0x400B_2018, "GPIOB_LOCKR"),
    (0x400B_201C, "GPIOB_DINR"),
    (0x400B_2020, "GPIOB_DOUTR"),
    (0x400B_2024, "GPIOB_SRR"),
    (0x400B_2028, "GPIOB_RR"),
    // GPIOC
    (0x400B_4000, "GPIOC_DIRCR"),
    (0x400B_4004, "GPIOC_INER"),
    (0x400B_4008, "GPIOC_PUR"),
    (0x400B_400C, "GPIOC_PDR"),
    (0x400B_4010, "GPIOC_ODR"),
    (0x400B_4014, "GPIOC_DRVR"),
    (0x400B_4018, "GPIOC_LOCKR"),
    (0x400B_401C, "GPIOC_DINR"),
    (0x400B_4020, "GPIOC_DOUTR"),
    (0x400B_4024, "GPIOC_SRR"),
    (0x400B_4028, "GPIOC_RR"),
    // GPIOD
    (0x400B_6000, "GPIOD_DIRCR"),
    (0x400B_6004, "GPIOD_INER"),
    (0x400B_6008, "GPIOD_PUR"),
    (0x400B_600C, "GPIOD_PDR"),
    (0x400B_6010, "GPIOD_ODR"),
    (0x400B_6014, "GPIOD_DRVR"),
    (0x400B_6018, "GPIOD_LOCKR"),
    (0x400B_601C, "GPIOD_DINR"),
    (0x400B_6020, "GPIOD_DOUTR"),
    (0x400B_6024, "GPIOD_SRR"),
    (0x400B_6028, "GPIOD_RR"),
    // GPIOE
    (0x400B_8000, "GPIOE_DIRCR"),
    (0x400B_8004, "GPIOE_INER"),
    (0x400B_8008, "GPIOE_PUR"),
    (0x400B_800C, "GPIOE_PDR"),
    (0x400B_8010, "GPIOE_ODR"),
    (0x400B_8014, "GPIOE_DRVR"),
    (0x400B_8018, "GPIOE_LOCKR"),
    (0x400B_801C, "GPIOE_DINR"),
    (0x400B_8020, "GPIOE_DOUTR"),
    (0x400B_8024, "GPIOE_SRR"),
    (0x400B_8028, "GPIOE_RR"),
    // Cortex-M3 SysTick
    (0xE000_E010, "SYST_CSR"),
    (0xE000_E014, "SYST_RVR"),
    (0xE000_E018, "SYST_CVR"),
    (0xE000_E01C, "SYST_CALIB"),
    // Cortex-M3 NVIC
    (0xE000_E100, "NVIC_ISER0"),
    (0xE000_E104, "NVIC_ISER1"),
    (0xE000_E180, "NVIC_ICER0"),
    (0xE000_E184, "NVIC_ICER1"),
    (0xE000_E200, "NVIC_ISPR0"),
    (0xE000_E204, "NVIC_ISPR1"),
    (0xE000_E280, "NVIC_ICPR0"),
    (0xE000_E284, "NVIC_ICPR1"),
    (0xE000_E300, "NVIC_IABR0"),
    (0xE000_E304, "NVIC_IABR1"),
    (0xE000_E400, "NVIC_IPR0"),
    (0xE000_E404, "NVIC_IPR1"),
    (0xE000_E408, "NVIC_IPR2"),
    (0xE000_E40C, "NVIC_IPR3"),
    (0xE000_E410, "NVIC_IPR4"),
    (0xE000_E414, "NVIC_IPR5"),
    (0xE000_E418, "NVIC_IPR6"),
    (0xE000_E41C, "NVIC_IPR7"),
    (0xE000_E420, "NVIC_IPR8"),
    (0xE000_E424, "NVIC_IPR9"),
    (0xE000_E428, "NVIC_IPR10"),
    (0xE000_E42C, "NVIC_IPR11"),
    (0xE000_E430, "NVIC_IPR12"),
    (0xE000_E434, "NVIC_IPR13"),
    (0xE000_E438, "NVIC_IPR14"),
    (0xE000_E43C, "NVIC_IPR15"),
    (0xE000_EF00, "NVIC_STIR"),
    // Cortex-M3 system control block
    (0xE000_ED00, "SCB_CPUID"),
    (0xE000_ED04, "SCB_ICSR"),
    (0xE000_ED08, "SCB_VTOR"),
    (0xE000_ED0C, "SCB_AIRCR"),
    (0xE000_ED10, "SCB_SCR"),
    (0xE000_ED14, "SCB_CCR"),
    (0xE000_ED18, "SCB_SHPR1"),
    (0xE000_ED1C, "SCB_SHPR2"),
    (0xE000_ED20, "SCB_SHPR3"),
    (0xE000_ED24, "SCB_SHCSR"),
    (0xE000_ED28, "SCB_CFSR"),
    (0xE000_ED2C, "SCB_HFSR"),
    (0xE000_ED30, "SCB_DFSR"),
    (0xE000_ED34, "SCB_MMFAR"),
    (0xE000_ED38, "SCB_BFAR"),
    (0xE000_ED3C, "SCB_AFSR"),
];

/// The HT32F1654 device profile.
pub const PROFILE: DeviceProfile<'static> = DeviceProfile {
    name: "HT32F1654",
    long_name: "HT32F1654 Flash Application",
    sram: MemoryRange::new(SRAM_BASE, SRAM_SIZE),
    max_reset_vector: MAX_RESET_VECTOR,
    interrupts: InterruptCatalog::new(&INTERRUPTS),
    registers: RegisterMap::new(&REGISTERS),
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_layout() {
        assert_eq!(INTERRUPTS[0], "Reset_Handler");
        assert_eq!(INTERRUPTS[14], "SysTick_Handler");
        assert_eq!(INTERRUPTS[15], "CKRDY_IRQHandler");
        assert_eq!(INTERRUPTS.len(), 15 + 63);
        assert_eq!(PROFILE.minimum_image_size(), 79 * 4);
    }

    #[test]
    fn test_register_addresses_unique() {
        let mut seen = HashSet::new();
        for (addr, name) in PROFILE.registers.iter() {
            assert!(seen.insert(addr), "duplicate register address for {}", name);
        }
    }

    #[test]
    fn test_registers_outside_code_and_sram() {
        let sram = PROFILE.sram;
        for (addr, name) in PROFILE.registers.iter() {
            assert!(addr >= 0x4000_0000, "{} is not a peripheral address", name);
            assert!(!sram.contains(u64::from(addr)));
        }
    }

    #[test]
    fn test_known_registers() {
        assert_eq!(PROFILE.registers.name_at(0x400B_0000), Some("GPIOA_DIRCR"));
        assert_eq!(PROFILE.registers.name_at(0xE000_ED08), Some("SCB_VTOR"));
        assert_eq!(PROFILE.registers.name_at(0x4008_8000), Some("CKCU_GCFGR"));
    }
}
