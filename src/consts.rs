/// JVM access flag bits, as they appear in class files and `java.lang.reflect.Modifier`
pub mod access_flags {
    pub const ACC_PUBLIC: u16 = 0x0001;
    pub const ACC_PRIVATE: u16 = 0x0002;
    pub const ACC_PROTECTED: u16 = 0x0004;
    pub const ACC_STATIC: u16 = 0x0008;
    pub const ACC_FINAL: u16 = 0x0010;
    pub const ACC_SYNCHRONIZED: u16 = 0x0020;
    pub const ACC_VOLATILE: u16 = 0x0040;
    pub const ACC_TRANSIENT: u16 = 0x0080;
    pub const ACC_NATIVE: u16 = 0x0100;
    pub const ACC_INTERFACE: u16 = 0x0200;
    pub const ACC_ABSTRACT: u16 = 0x0400;
    pub const ACC_STRICT: u16 = 0x0800;
}

use access_flags::*;

// Modifier bits that participate in the class word of the canonical encoding
pub const CLASS_MODIFIER_MASK: u16 = ACC_PUBLIC | ACC_FINAL | ACC_INTERFACE | ACC_ABSTRACT;

pub const FIELD_MODIFIER_MASK: u16 = ACC_PUBLIC
    | ACC_PRIVATE
    | ACC_PROTECTED
    | ACC_STATIC
    | ACC_FINAL
    | ACC_VOLATILE
    | ACC_TRANSIENT;

// Shared by constructors and methods
pub const METHOD_MODIFIER_MASK: u16 = ACC_PUBLIC
    | ACC_PRIVATE
    | ACC_PROTECTED
    | ACC_STATIC
    | ACC_FINAL
    | ACC_SYNCHRONIZED
    | ACC_NATIVE
    | ACC_ABSTRACT
    | ACC_STRICT;

pub const CLINIT_NAME: &str = "<clinit>";
pub const INIT_NAME: &str = "<init>";
pub const CLINIT_DESCRIPTOR: &str = "()V";

pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";
pub const OBJECT_DESCRIPTOR: &str = "Ljava/lang/Object;";

pub const SERIAL_VERSION_UID_FIELD: &str = "serialVersionUID";

// DataOutput.writeUTF length prefix is an unsigned 16-bit count
pub const MAX_UTF_LENGTH: usize = 65_535;

// Hierarchy walks: upper bound on queue pops before giving up
pub const MAX_HIERARCHY_STEPS: usize = 200_000;

pub const JAVA_IO_SERIALIZABLE: &str = "java.io.Serializable";

// Public top-level types of java.lang, in scope everywhere without an import
pub const JAVA_LANG_SIMPLE_TYPES: &[&str] = &[
    "AbstractMethodError", "Appendable", "ArithmeticException", "ArrayIndexOutOfBoundsException",
    "ArrayStoreException", "AssertionError", "AutoCloseable", "Boolean", "BootstrapMethodError", "Byte",
    "CharSequence", "Character", "Class", "ClassCastException", "ClassCircularityError", "ClassFormatError",
    "ClassLoader", "ClassNotFoundException", "ClassValue", "CloneNotSupportedException", "Cloneable",
    "Comparable", "Compiler", "Deprecated", "Double", "Enum", "EnumConstantNotPresentException", "Error",
    "Exception", "ExceptionInInitializerError", "Float", "FunctionalInterface", "IllegalAccessError",
    "IllegalAccessException", "IllegalArgumentException", "IllegalCallerException",
    "IllegalMonitorStateException", "IllegalStateException", "IllegalThreadStateException",
    "IncompatibleClassChangeError", "IndexOutOfBoundsException", "InheritableThreadLocal",
    "InstantiationError", "InstantiationException", "Integer", "InternalError", "InterruptedException",
    "Iterable", "LayerInstantiationException", "LinkageError", "Long", "Math", "Module", "ModuleLayer",
    "NegativeArraySizeException", "NoClassDefFoundError", "NoSuchFieldError", "NoSuchFieldException",
    "NoSuchMethodError", "NoSuchMethodException", "NullPointerException", "Number", "NumberFormatException",
    "Object", "OutOfMemoryError", "Override", "Package", "Process", "ProcessBuilder", "ProcessHandle",
    "Readable", "Record", "ReflectiveOperationException", "Runnable", "Runtime", "RuntimeException",
    "RuntimePermission", "SafeVarargs", "SecurityException", "SecurityManager", "Short",
    "StackOverflowError", "StackTraceElement", "StackWalker", "StrictMath", "String", "StringBuffer",
    "StringBuilder", "StringIndexOutOfBoundsException", "SuppressWarnings", "System", "Thread",
    "ThreadDeath", "ThreadGroup", "ThreadLocal", "Throwable", "TypeNotPresentException", "UnknownError",
    "UnsatisfiedLinkError", "UnsupportedClassVersionError", "UnsupportedOperationException", "VerifyError",
    "VirtualMachineError", "Void",
];

// Commonly used JDK types outside java.lang, for on-demand imports and
// package-qualified member types
pub const JDK_PACKAGE_TYPES: &[(&str, &[&str])] = &[
    ("java.io", &[
        "BufferedInputStream", "BufferedOutputStream", "BufferedReader", "BufferedWriter",
        "ByteArrayInputStream", "ByteArrayOutputStream", "Closeable", "DataInput", "DataInputStream",
        "DataOutput", "DataOutputStream", "Externalizable", "File", "FileInputStream",
        "FileNotFoundException", "FileOutputStream", "FileReader", "FileWriter", "Flushable", "IOException",
        "InputStream", "InputStreamReader", "InvalidClassException", "InvalidObjectException",
        "NotSerializableException", "ObjectInput", "ObjectInputStream", "ObjectOutput", "ObjectOutputStream",
        "ObjectStreamException", "OutputStream", "OutputStreamWriter", "PrintStream", "PrintWriter", "Reader",
        "Serial", "Serializable", "StringReader", "StringWriter", "UncheckedIOException",
        "UnsupportedEncodingException", "Writer",
    ]),
    ("java.math", &["BigDecimal", "BigInteger", "MathContext", "RoundingMode"]),
    ("java.net", &["InetAddress", "InetSocketAddress", "ServerSocket", "Socket", "URI", "URL"]),
    ("java.nio.charset", &["Charset", "StandardCharsets"]),
    ("java.nio.file", &["FileSystem", "Files", "Path", "Paths"]),
    ("java.time", &[
        "Clock", "DayOfWeek", "Duration", "Instant", "LocalDate", "LocalDateTime", "LocalTime", "Month",
        "MonthDay", "OffsetDateTime", "OffsetTime", "Period", "Year", "YearMonth", "ZoneId", "ZoneOffset",
        "ZonedDateTime",
    ]),
    ("java.util", &[
        "AbstractCollection", "AbstractList", "AbstractMap", "AbstractQueue", "AbstractSequentialList",
        "AbstractSet", "ArrayDeque", "ArrayList", "Arrays", "BitSet", "Calendar", "Collection", "Collections",
        "Comparator", "ConcurrentModificationException", "Currency", "Date", "Deque", "Dictionary", "EnumMap",
        "EnumSet", "Enumeration", "EventListener", "EventObject", "GregorianCalendar", "HashMap", "HashSet",
        "Hashtable", "IdentityHashMap", "Iterator", "LinkedHashMap", "LinkedHashSet", "LinkedList", "List",
        "ListIterator", "Locale", "Map", "NavigableMap", "NavigableSet", "NoSuchElementException", "Objects",
        "Optional", "OptionalDouble", "OptionalInt", "OptionalLong", "PriorityQueue", "Properties", "Queue",
        "Random", "RandomAccess", "Scanner", "Set", "SortedMap", "SortedSet", "Spliterator", "Stack",
        "StringJoiner", "TimeZone", "Timer", "TreeMap", "TreeSet", "UUID", "Vector", "WeakHashMap",
    ]),
    ("java.util.concurrent", &[
        "BlockingQueue", "Callable", "CompletableFuture", "CompletionStage", "ConcurrentHashMap",
        "ConcurrentLinkedQueue", "ConcurrentMap", "CopyOnWriteArrayList", "CountDownLatch",
        "ExecutionException", "Executor", "ExecutorService", "Executors", "Future", "LinkedBlockingQueue",
        "ScheduledExecutorService", "Semaphore", "ThreadLocalRandom", "TimeUnit", "TimeoutException",
    ]),
    ("java.util.concurrent.atomic", &["AtomicBoolean", "AtomicInteger", "AtomicLong", "AtomicReference"]),
    ("java.util.concurrent.locks", &["Condition", "Lock", "ReadWriteLock", "ReentrantLock", "ReentrantReadWriteLock"]),
    ("java.util.function", &[
        "BiConsumer", "BiFunction", "BiPredicate", "BinaryOperator", "BooleanSupplier", "Consumer",
        "DoubleFunction", "DoubleSupplier", "Function", "IntFunction", "IntPredicate", "IntSupplier",
        "IntUnaryOperator", "LongFunction", "LongSupplier", "Predicate", "Supplier", "ToDoubleFunction",
        "ToIntFunction", "ToLongFunction", "UnaryOperator",
    ]),
    ("java.util.regex", &["Matcher", "Pattern"]),
    ("java.util.stream", &["Collectors", "DoubleStream", "IntStream", "LongStream", "Stream"]),
];

/// Whether `package.simple` is one of the JDK types listed above
pub fn is_well_known_type(package: &str, simple: &str) -> bool {
    if package == "java.lang" {
        return JAVA_LANG_SIMPLE_TYPES.contains(&simple);
    }
    JDK_PACKAGE_TYPES
        .iter()
        .any(|(pkg, names)| *pkg == package && names.contains(&simple))
}
